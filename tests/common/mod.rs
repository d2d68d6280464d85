//! Shared fixtures for integration tests

#![allow(dead_code)]

/// A small two-level fabric as written by ibnetdiscover:
/// one spine, two leaves, three hosts. Each link appears from both ends.
pub const FAT_TREE: &str = r#"#
# Topology file: generated on Tue Jun  2 10:00:00 2015
#
# Initiated from node 0002c9030002f4a0 port 0002c9030002f4a1

vendid=0x2c9
devid=0xc738
sysimgguid=0x2c90200421b2b
switchguid=0x2c90200421b28(2c90200421b28)
Switch	36 "S-0002c90200421b28"		# "MF0;spine-1:SX6036/U1" enhanced port 0 lid 3 lmc 0
[1]	"S-0002c90200421c30"[35]		# "MF0;leaf-1:SX6036/U1" lid 4 4xFDR
[2]	"S-0002c90200421d40"[35]		# "MF0;leaf-2:SX6036/U1" lid 6 4xFDR

vendid=0x2c9
devid=0xc738
switchguid=0x2c90200421c30(2c90200421c30)
Switch	36 "S-0002c90200421c30"		# "MF0;leaf-1:SX6036/U1" enhanced port 0 lid 4 lmc 0
[1]	"H-0002c9030002f4a0"[1](2c9030002f4a1) 		# "node1 HCA-1" lid 5 4xFDR
[2]	"H-0002c9030002f5b0"[1](2c9030002f5b1) 		# "node2 HCA-1" lid 7 4xFDR
[35]	"S-0002c90200421b28"[1]		# "MF0;spine-1:SX6036/U1" lid 3 4xFDR

vendid=0x2c9
devid=0xc738
switchguid=0x2c90200421d40(2c90200421d40)
Switch	36 "S-0002c90200421d40"		# "MF0;leaf-2:SX6036/U1" enhanced port 0 lid 6 lmc 0
[1]	"H-0002c9030002f6c0"[1](2c9030002f6c1) 		# "node3 HCA-1" lid 8 4xQDR
[35]	"S-0002c90200421b28"[2]		# "MF0;spine-1:SX6036/U1" lid 3 4xFDR

vendid=0x2c9
devid=0x1003
sysimgguid=0x2c9030002f4a3
caguid=0x2c9030002f4a0
Ca	2 "H-0002c9030002f4a0"		# "node1 HCA-1"
[1](2c9030002f4a1) 	"S-0002c90200421c30"[1]		# lid 5 lmc 0 "MF0;leaf-1:SX6036/U1" lid 4 4xFDR

vendid=0x2c9
devid=0x1003
caguid=0x2c9030002f5b0
Ca	2 "H-0002c9030002f5b0"		# "node2 HCA-1"
[1](2c9030002f5b1) 	"S-0002c90200421c30"[2]		# lid 7 lmc 0 "MF0;leaf-1:SX6036/U1" lid 4 4xFDR

vendid=0x2c9
devid=0x1003
caguid=0x2c9030002f6c0
Ca	2 "H-0002c9030002f6c0"		# "node3 HCA-1"
[1](2c9030002f6c1) 	"S-0002c90200421d40"[1]		# lid 8 lmc 0 "MF0;leaf-2:SX6036/U1" lid 6 4xQDR
"#;

pub const SPINE: &str = "S-0002c90200421b28";
pub const LEAF_1: &str = "S-0002c90200421c30";
pub const LEAF_2: &str = "S-0002c90200421d40";
pub const NODE_1: &str = "H-0002c9030002f4a0";
pub const NODE_2: &str = "H-0002c9030002f5b0";
pub const NODE_3: &str = "H-0002c9030002f6c0";

/// Minimal two-device dump: SW1 and HCA1 joined on ports 1/1
pub const SW1_HCA1: &str = r#"Switch	8 "SW1"		# "switch one"
[1]	"HCA1"[1]		# "host one" lid 2 4xEDR
Ca	1 "HCA1"		# "host one"
[1]	"SW1"[1]		# lid 2 lmc 0 "switch one" lid 1 4xEDR
"#;

/// Remove `bgcolor`, `fillcolor` and `color` attributes from a dot statement
pub fn without_color_attrs(statement: &str) -> String {
    let re = regex_lite::Regex::new(r##",?\s*(bgcolor|fillcolor|color)="#[0-9a-f]{6}""##).unwrap();
    re.replace_all(statement, "").into_owned()
}

/// Value of a quoted dot attribute in one statement
pub fn dot_attr<'a>(statement: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {}=\"", name);
    let start = statement.find(&needle)? + needle.len();
    let len = statement[start..].find('"')?;
    Some(&statement[start..start + len])
}

/// Replace numeric `r/g/b/a` viz colour attributes with placeholders
pub fn strip_viz_colors(document: &str) -> String {
    let re = regex_lite::Regex::new(r#"<viz:color [^>]*/>"#).unwrap();
    re.replace_all(document, "<viz:color/>").into_owned()
}
