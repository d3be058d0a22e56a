//! Rendering records and the emission sink used by `draw`.

use std::fmt;

/// Which variant of the component hierarchy produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Composite,
    Leaf,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Composite => write!(f, "composite"),
            ComponentKind::Leaf => write!(f, "leaf"),
        }
    }
}

/// One rendering record per visited node: kind, identity (leaves only) and
/// the absolute position after summing all ancestor offsets plus the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRecord {
    pub kind: ComponentKind,
    /// Only leaves carry a name
    pub name: Option<String>,
    pub x: i64,
    pub y: i64,
}

impl fmt::Display for RenderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Drawing {} {} at ({}, {})", self.kind, name, self.x, self.y),
            None => write!(f, "Drawing {} at ({}, {})", self.kind, self.x, self.y),
        }
    }
}

/// Sink receiving one record per node visited during `draw`.
///
/// Kept as a trait so tests can collect records in memory while the CLI
/// buffers them for terminal output.
pub trait RenderSink {
    fn record(&mut self, record: RenderRecord);
}

/// In-memory sink collecting records in emission order.
#[derive(Debug, Default)]
pub struct RecordBuffer {
    records: Vec<RenderRecord>,
}

impl RecordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[RenderRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<RenderRecord> {
        self.records
    }
}

impl RenderSink for RecordBuffer {
    fn record(&mut self, record: RenderRecord) {
        self.records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display_includes_kind_and_position() {
        let record = RenderRecord {
            kind: ComponentKind::Composite,
            name: None,
            x: 10,
            y: 10,
        };
        assert_eq!(record.to_string(), "Drawing composite at (10, 10)");

        let record = RenderRecord {
            kind: ComponentKind::Leaf,
            name: Some("Market".to_string()),
            x: 13,
            y: 13,
        };
        assert_eq!(record.to_string(), "Drawing leaf Market at (13, 13)");
    }
}
