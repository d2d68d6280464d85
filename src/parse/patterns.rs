//! Line patterns recognized in an `ibnetdiscover` dump
//!
//! Only three kinds of line carry information the graph needs:
//!
//! ```text
//! switchguid=0x2c90200421b28(2c90200421b28)
//! Switch  36 "S-0002c90200421b28"   # "MF0;spine-1:SX6036/U1" enhanced port 0 lid 3 lmc 0
//! [1]     "H-0002c9030002f4a0"[1](2c9030002f4a1)   # "node1 HCA-1" lid 5 4xQDR
//! ```
//!
//! Every other line classifies as [`Line::Unrecognized`].

use crate::graph::{LinkSpeed, NodeType};
use regex_lite::Regex;
use std::sync::OnceLock;

/// A classified dump line, borrowing from the input
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    /// `switchguid=0x...` / `caguid=0x...` preceding a declaration
    GuidHint(&'a str),
    /// `<Kind> <ports> "<name>" # "<label>" ...`
    Declaration(Declaration<'a>),
    /// `[<port>] ... "<remote>"[<remote_port>] ...`
    Link(LinkLine<'a>),
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration<'a> {
    pub node_type: NodeType,
    pub port_count: u32,
    pub name: &'a str,
    pub label: Option<&'a str>,
    pub lid: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkLine<'a> {
    pub local_port: u32,
    pub remote: &'a str,
    pub remote_port: u32,
    /// LID of the remote port (the last `lid <n>` on the line)
    pub remote_lid: Option<u32>,
    pub speed: Option<LinkSpeed>,
}

struct Patterns {
    guid: Regex,
    declaration: Regex,
    link: Regex,
    lid: Regex,
    speed: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        guid: Regex::new(r"^(?:switchguid|caguid)=0x([0-9a-fA-F]+)").expect("guid pattern"),
        declaration: Regex::new(r#"^(\w+)\s+(\d+)\s+"([^"]+)"(?:\s+#\s+"([^"]*)")?(.*)$"#)
            .expect("declaration pattern"),
        link: Regex::new(r#"^\[(\d+)\][^"]*"([^"]+)"\[(\d+)\](.*)$"#).expect("link pattern"),
        lid: Regex::new(r"(?:^|\s)lid\s+(\d+)").expect("lid pattern"),
        speed: Regex::new(r"(?:^|\s)(\d+x)(FDR10|SDR|DDR|QDR|FDR|EDR|HDR|NDR|XDR)(?:\s|$)")
            .expect("speed pattern"),
    })
}

/// Classify one trimmed line
pub fn classify(line: &str) -> Line<'_> {
    let p = patterns();

    if let Some(caps) = p.guid.captures(line) {
        if let Some(hex) = caps.get(1) {
            return Line::GuidHint(hex.as_str());
        }
    }

    if let Some(caps) = p.declaration.captures(line) {
        let kind = caps.get(1).map_or("", |m| m.as_str());
        let ports = caps.get(2).and_then(|m| m.as_str().parse().ok());
        let name = caps.get(3).map(|m| m.as_str());
        if let (Some(port_count), Some(name)) = (ports, name) {
            let rest = caps.get(5).map_or("", |m| m.as_str());
            return Line::Declaration(Declaration {
                node_type: NodeType::from_keyword(kind),
                port_count,
                name,
                label: caps.get(4).map(|m| m.as_str()),
                lid: first_lid(rest),
            });
        }
    }

    if let Some(caps) = p.link.captures(line) {
        let local_port = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let remote = caps.get(2).map(|m| m.as_str());
        let remote_port = caps.get(3).and_then(|m| m.as_str().parse().ok());
        if let (Some(local_port), Some(remote), Some(remote_port)) = (local_port, remote, remote_port)
        {
            let rest = caps.get(4).map_or("", |m| m.as_str());
            return Line::Link(LinkLine {
                local_port,
                remote,
                remote_port,
                remote_lid: last_lid(rest),
                speed: speed(rest),
            });
        }
    }

    Line::Unrecognized
}

fn first_lid(text: &str) -> Option<u32> {
    patterns()
        .lid
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn last_lid(text: &str) -> Option<u32> {
    patterns()
        .lid
        .captures_iter(text)
        .last()
        .and_then(|c| c.get(1).and_then(|m| m.as_str().parse().ok()))
}

fn speed(text: &str) -> Option<LinkSpeed> {
    let caps = patterns().speed.captures(text)?;
    Some(LinkSpeed::new(caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_declaration() {
        let line = r#"Switch	36 "S-0002c90200421b28"		# "MF0;spine-1:SX6036/U1" enhanced port 0 lid 3 lmc 0"#;
        match classify(line) {
            Line::Declaration(d) => {
                assert_eq!(d.node_type, NodeType::Switch);
                assert_eq!(d.port_count, 36);
                assert_eq!(d.name, "S-0002c90200421b28");
                assert_eq!(d.label, Some("MF0;spine-1:SX6036/U1"));
                assert_eq!(d.lid, Some(3));
            }
            other => panic!("expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn hca_declaration_without_lid() {
        let line = r#"Ca	2 "H-0002c9030002f4a0"		# "node1 HCA-1""#;
        match classify(line) {
            Line::Declaration(d) => {
                assert_eq!(d.node_type, NodeType::Hca);
                assert_eq!(d.port_count, 2);
                assert_eq!(d.label, Some("node1 HCA-1"));
                assert_eq!(d.lid, None);
            }
            other => panic!("expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn declaration_without_label() {
        match classify(r#"Switch 8 "SW1""#) {
            Line::Declaration(d) => {
                assert_eq!(d.name, "SW1");
                assert_eq!(d.label, None);
            }
            other => panic!("expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn switch_port_line() {
        let line = r#"[1]	"H-0002c9030002f4a0"[1](2c9030002f4a1) 		# "node1 HCA-1" lid 5 4xQDR"#;
        match classify(line) {
            Line::Link(l) => {
                assert_eq!(l.local_port, 1);
                assert_eq!(l.remote, "H-0002c9030002f4a0");
                assert_eq!(l.remote_port, 1);
                assert_eq!(l.remote_lid, Some(5));
                assert_eq!(l.speed, Some(LinkSpeed::new("4x", "QDR")));
            }
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn hca_port_line_takes_remote_lid() {
        let line = r#"[1](2c9030002f4a1) 	"S-0002c90200421b28"[12]		# lid 5 lmc 0 "MF0;spine-1:SX6036/U1" lid 3 4xFDR10"#;
        match classify(line) {
            Line::Link(l) => {
                assert_eq!(l.remote, "S-0002c90200421b28");
                assert_eq!(l.remote_port, 12);
                assert_eq!(l.remote_lid, Some(3));
                assert_eq!(l.speed, Some(LinkSpeed::new("4x", "FDR10")));
            }
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn guid_hint() {
        assert_eq!(
            classify("switchguid=0x2c90200421b28(2c90200421b28)"),
            Line::GuidHint("2c90200421b28")
        );
        assert_eq!(classify("caguid=0x2c9030002f4a0"), Line::GuidHint("2c9030002f4a0"));
    }

    #[test]
    fn noise_is_unrecognized() {
        for line in [
            "#",
            "# Topology file: generated on Tue Jun  2 10:00:00 2015",
            "vendid=0x2c9",
            "devid=0xc738",
            "sysimgguid=0x2c90200421b2b",
            "[3]",
            "",
        ] {
            assert_eq!(classify(line), Line::Unrecognized, "line: {:?}", line);
        }
    }
}
