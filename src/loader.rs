use crate::error::{GradeError, GradeResult};
use crate::keys::KeyTable;
use crate::layouts::LayoutSet;
use crate::penalties::PenaltyTable;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Blocks every configuration file must define, checked in this order.
pub const REQUIRED_SECTIONS: [&str; 4] = ["keys", "weights", "penalties", "layouts"];

// Quoted literals are matched first so comment markers inside them survive.
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)("[^"]*"|'[^']*')|(/\*.*?\*/|//[^\r\n]*)"#).expect("comment pattern")
});

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[([^\[\]]+)\]\s*$").expect("header pattern"));

/// Raw text of each named block, keyed by section name.
#[derive(Debug, Clone, Default)]
pub struct ConfigSections {
    blocks: HashMap<String, String>,
    order: Vec<String>,
}

impl ConfigSections {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.blocks.get(name).map(String::as_str)
    }

    pub fn require(&self, name: &str) -> GradeResult<&str> {
        self.get(name)
            .ok_or_else(|| GradeError::MissingSection(name.to_string()))
    }

    /// Section names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// Removes `//` line comments and `/* */` block comments, leaving quoted
/// literals untouched.
pub fn strip_comments(text: &str) -> String {
    COMMENT_RE
        .replace_all(text, |caps: &Captures| match caps.get(1) {
            Some(quoted) => quoted.as_str().to_string(),
            None => String::new(),
        })
        .into_owned()
}

/// Single pass over the (already comment-free) text, building name -> block.
pub fn split_sections(text: &str) -> ConfigSections {
    let mut sections = ConfigSections::default();
    let mut current: Option<(String, Vec<&str>)> = None;
    let mut preamble = 0;

    for line in text.lines() {
        if let Some(caps) = HEADER_RE.captures(line) {
            close_section(&mut sections, current.take());
            current = Some((caps[1].trim().to_string(), Vec::new()));
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        match current.as_mut() {
            Some((_, lines)) => lines.push(line),
            None => preamble += 1,
        }
    }
    close_section(&mut sections, current.take());

    if preamble > 0 {
        debug!("Ignored {} lines before the first section header.", preamble);
    }
    sections
}

fn close_section(sections: &mut ConfigSections, done: Option<(String, Vec<&str>)>) {
    let Some((name, lines)) = done else {
        return;
    };
    if sections.blocks.contains_key(&name) {
        warn!("Duplicate [{}] block ignored; the first one is used.", name);
        return;
    }
    sections.blocks.insert(name.clone(), lines.join("\n"));
    sections.order.push(name);
}

/// Strips comments, splits sections and checks that every required block exists.
pub fn parse_config(text: &str) -> GradeResult<ConfigSections> {
    let sections = split_sections(&strip_comments(text));
    for name in REQUIRED_SECTIONS {
        sections.require(name)?;
    }
    for name in sections.names() {
        if !REQUIRED_SECTIONS.contains(&name) {
            debug!("Unknown section [{}] ignored.", name);
        }
    }
    Ok(sections)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> GradeResult<ConfigSections> {
    let text = fs::read_to_string(path.as_ref())?;
    debug!("Loaded config from {}", path.as_ref().display());
    parse_config(&text)
}

/// Every table the configuration file defines, built and validated.
#[derive(Debug, Clone)]
pub struct ConfigTables {
    pub keys: KeyTable,
    pub layouts: LayoutSet,
    pub penalties: PenaltyTable,
}

impl ConfigTables {
    pub fn from_sections(sections: &ConfigSections) -> GradeResult<Self> {
        let keys = KeyTable::build(sections.require("keys")?, sections.require("weights")?)?;
        let layouts = LayoutSet::build(sections.require("layouts")?, &keys)?;
        let penalties = PenaltyTable::build(sections.require("penalties")?)?;
        debug!(
            "Config tables: {} keys, {} layouts, {} penalty rows",
            keys.len(),
            layouts.len(),
            penalties.len()
        );
        Ok(Self {
            keys,
            layouts,
            penalties,
        })
    }

    pub fn parse(text: &str) -> GradeResult<Self> {
        Self::from_sections(&parse_config(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> GradeResult<Self> {
        Self::from_sections(&load_config(path)?)
    }
}
