use serde::Serialize;
use tera::{Context, Tera};

use pediguide_core::models::answers::AnswerValue;
use pediguide_core::models::form_config::FormConfig;
use pediguide_core::models::submission::Submission;
use pediguide_forms::wizard::{step_questions, STEP_COUNT};

use crate::error::ExportError;

pub const REPORT_TITLE: &str = "PediGuide - Compte rendu";
pub const NOT_PROVIDED: &str = "Non renseigné";

const TEMPLATE_NAME: &str = "report.txt";

/// Plain-text layout consumed by [`crate::pdf::generate_pdf`]:
/// `# ` starts the title, `## ` a section heading.
const REPORT_TEMPLATE: &str = "# {{ title }}

Identifiant: {{ id }}
Date: {{ date }}
{% for section in sections %}
## {{ section.title }}
{% for line in section.lines -%}
{{ line.label }}: {{ line.value }}
{% endfor -%}
{% endfor -%}
";

fn section_title(step: u8) -> &'static str {
    match step {
        1 => "Informations patient",
        2 => "Observations",
        3 => "Durée et inquiétude",
        4 => "Actions entreprises",
        _ => "Notes complémentaires",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<ReportLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    pub id: String,
    pub date: String,
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Lay out `submission` by wizard step. Only fields active in `config`
    /// appear, under their configured labels and in display order; steps
    /// with nothing to show are dropped.
    pub fn build(submission: &Submission, config: &FormConfig) -> Self {
        let sections = (1..=STEP_COUNT)
            .filter_map(|step| {
                let lines: Vec<ReportLine> = step_questions(step, config)
                    .into_iter()
                    .filter_map(|key| {
                        let field = config.field(key)?;
                        Some(ReportLine {
                            label: single_line(&field.label),
                            value: display_value(submission.answers.get(key)),
                        })
                    })
                    .collect();
                (!lines.is_empty()).then(|| ReportSection {
                    title: section_title(step).to_string(),
                    lines,
                })
            })
            .collect();

        let date = submission
            .created_at
            .to_zoned(jiff::tz::TimeZone::system())
            .date();

        Self {
            title: REPORT_TITLE.to_string(),
            id: submission.id.to_string(),
            date: date.to_string(),
            sections,
        }
    }
}

fn display_value(value: AnswerValue<'_>) -> String {
    match value {
        AnswerValue::Text(text) if !text.trim().is_empty() => single_line(text),
        AnswerValue::List(items) if !items.is_empty() => items
            .iter()
            .map(|item| single_line(item))
            .collect::<Vec<_>>()
            .join(", "),
        _ => NOT_PROVIDED.to_string(),
    }
}

/// Collapse every whitespace run, line breaks included, to one space.
/// Each report line must stay a single `label: value` line so the PDF
/// layout never reads user text as a title or heading.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn render_report(report: &Report) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, REPORT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(TEMPLATE_NAME, &context)?)
}
