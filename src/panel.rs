use serde::Deserialize;

fn default_summary() -> String {
    "details".to_string()
}

/// Expandable detail region attached to a slide. The only state is the
/// `expanded` flag; the trigger caption is derived from it.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailPanel {
    #[serde(default = "default_summary")]
    pub summary: String,
    pub text: String,
    #[serde(skip)]
    pub expanded: bool,
}

impl DetailPanel {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn button_label(&self) -> String {
        if self.expanded {
            format!("- Hide {}", self.summary)
        } else {
            format!("+ View {}", self.summary)
        }
    }
}
