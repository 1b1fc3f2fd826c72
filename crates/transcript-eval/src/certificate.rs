//! Exam certificate recognition.

use transcript_model::StudentDocument;

const CERTIFICATE_TITLE: &str = "examensbevis";
const EXCLUDED_TITLE: &str = "gymnasieexamen";
const ACCEPTED_SCHOOL_FORMS: &[&str] = &[
    "gymnasieskola",
    "kommunal vuxenutbildning",
    "komvux utbildning",
];

/// Whether the document is an upper-secondary exam certificate from an accepted school form.
///
/// The title must name an "Examensbevis" and must not name a "Gymnasieexamen".
pub fn is_exam_certificate(document: &StudentDocument) -> bool {
    let title = document.title.to_lowercase();
    if !title.contains(CERTIFICATE_TITLE) || title.contains(EXCLUDED_TITLE) {
        return false;
    }

    let school_form = document.school_form.to_lowercase();
    ACCEPTED_SCHOOL_FORMS
        .iter()
        .any(|form| school_form.contains(form))
}
