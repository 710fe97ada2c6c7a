use crate::data::ProvisionReport;
use owo_colors::OwoColorize;

pub struct ProvisionSummary {
    pub prefix: String,
    pub message: String,
}

impl ProvisionSummary {
    pub fn format(report: &ProvisionReport) -> Self {
        if report.is_empty() {
            return Self {
                prefix: "•".yellow().to_string(),
                message: "No offline data required".to_string(),
            };
        }

        let downloaded = report.downloaded().count();
        let up_to_date = report.up_to_date().count();

        match (downloaded, up_to_date) {
            (0, u) => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} data item(s) up to date", u.green()),
            },
            (d, u) => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} downloaded, {} up to date", d.green(), u),
            },
        }
    }
}
