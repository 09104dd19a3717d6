use lopdf::content::Content;
use lopdf::{Document, Object};

use pediguide_core::models::answers::Answers;
use pediguide_core::models::field::FieldKey;
use pediguide_core::models::form_config::default_form_config;
use pediguide_core::models::submission::Submission;
use pediguide_export::pdf::{generate_pdf, win_ansi, wrap};
use pediguide_export::render::{render_report, Report, NOT_PROVIDED, REPORT_TITLE};
use pediguide_export::{report_filename, submission_pdf};

fn submission() -> Submission {
    let mut submission = Submission::new(Answers {
        child_first_name: "Léa".to_string(),
        child_last_name: "Durand".to_string(),
        child_birth_date: "2021-05-12".to_string(),
        consultation_reason: "Fièvre persistante".to_string(),
        clinical_signs: vec!["Fièvre".to_string(), "Toux".to_string()],
        duration: "Depuis 1 à 2 jours".to_string(),
        worry_level: "Moyennement inquiétant".to_string(),
        ..Answers::default()
    });
    submission.created_at = "2026-03-04T12:00:00Z".parse().unwrap();
    submission
}

#[test]
fn report_follows_configuration_steps_and_labels() {
    let report = Report::build(&submission(), &default_form_config());

    assert_eq!(report.title, REPORT_TITLE);
    assert_eq!(report.date, "2026-03-04");
    let titles: Vec<&str> = report.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Informations patient",
            "Observations",
            "Durée et inquiétude",
            "Actions entreprises",
            "Notes complémentaires",
        ]
    );

    let first = &report.sections[0];
    assert_eq!(first.lines.len(), 4);
    assert_eq!(first.lines[0].value, "Léa");

    let observations = &report.sections[1];
    assert_eq!(observations.lines[0].value, NOT_PROVIDED);
    assert_eq!(observations.lines[1].value, "Fièvre, Toux");
}

#[test]
fn inactive_fields_and_empty_steps_are_left_out() {
    let mut config = default_form_config();
    for field in &mut config.fields {
        if field.key == FieldKey::ActionsTaken {
            field.is_active = false;
        }
        if field.key == FieldKey::ChildFirstName {
            field.label = "Prénom".to_string();
        }
    }

    let report = Report::build(&submission(), &config);
    assert_eq!(report.sections.len(), 4);
    assert!(report.sections.iter().all(|s| s.title != "Actions entreprises"));
    assert_eq!(report.sections[0].lines[0].label, "Prénom");
}

#[test]
fn rendered_text_has_title_headings_and_lines() {
    let report = Report::build(&submission(), &default_form_config());
    let text = render_report(&report).unwrap();

    assert!(text.starts_with("# PediGuide - Compte rendu\n"));
    assert!(text.contains(&format!("Identifiant: {}\n", report.id)));
    assert!(text.contains("\n## Informations patient\n"));
    assert!(text.contains("Niveau d'inquiétude: Moyennement inquiétant\n"));
    assert!(text.contains(&format!(": {NOT_PROVIDED}\n")));
}

#[test]
fn multi_line_answers_stay_on_their_labelled_line() {
    let mut submission = submission();
    submission.answers.additional_notes = "rien\n## Diagnostic: appendicite\n# URGENT".to_string();
    submission.answers.clinical_signs = vec!["Fièvre\n# Toux".to_string()];

    let report = Report::build(&submission, &default_form_config());
    let notes = &report.sections[4].lines[0];
    assert_eq!(notes.label, "Message complémentaire");
    assert_eq!(notes.value, "rien ## Diagnostic: appendicite # URGENT");

    let text = render_report(&report).unwrap();
    assert!(text.contains("Message complémentaire: rien ## Diagnostic: appendicite # URGENT\n"));
    assert!(text.contains(": Fièvre # Toux\n"));
    let titles = text.lines().filter(|l| l.starts_with("# ")).count();
    assert_eq!(titles, 1);
    assert!(!text.lines().any(|l| l.starts_with("## Diagnostic") || l == "# URGENT"));
}

#[test]
fn pdf_is_a_loadable_document() {
    let bytes = submission_pdf(&submission(), &default_form_config()).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.5"));

    let mut doc = Document::load_mem(&bytes).unwrap();
    doc.decompress();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);

    let page_id = *pages.values().next().unwrap();
    let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
    let shown: Vec<Vec<u8>> = content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(bytes.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(shown[0], REPORT_TITLE.as_bytes());
    assert!(shown.contains(&win_ansi("Informations patient")));
}

#[test]
fn long_text_spills_onto_more_pages() {
    let body = (0..120)
        .map(|i| format!("Ligne {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let bytes = generate_pdf(&format!("# Titre\n{body}\n")).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    assert!(doc.get_pages().len() > 1);
}

#[test]
fn wrapping_and_encoding() {
    assert_eq!(wrap("aa bb cc", 5), vec!["aa bb", "cc"]);
    assert_eq!(wrap("", 5), vec![""]);
    assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);

    assert_eq!(win_ansi("é"), vec![0xe9]);
    assert_eq!(win_ansi("d’œil"), vec![b'd', 0x92, 0x9c, b'i', b'l']);
    assert_eq!(win_ansi("日"), vec![b'?']);
}

#[test]
fn filename_uses_the_date() {
    assert_eq!(
        report_filename(jiff::civil::date(2026, 1, 9)),
        "pediguide-report-2026-01-09.pdf"
    );
}
