use tablegen_layout::ColumnSpec;

/// Declares column sizing rules left to right.
#[derive(Debug, Default)]
pub struct ColumnsBuilder {
    columns: Vec<ColumnSpec>,
}

impl ColumnsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto(&mut self) -> &mut Self {
        self.columns.push(ColumnSpec::Auto);
        self
    }

    pub fn fixed(&mut self, width: f32) -> &mut Self {
        self.columns.push(ColumnSpec::Fixed(width));
        self
    }

    pub(crate) fn finish(self) -> Vec<ColumnSpec> {
        self.columns
    }
}
