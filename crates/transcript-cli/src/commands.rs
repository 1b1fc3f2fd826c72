use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use transcript_catalog::{CatalogProvider, CatalogSet};
use transcript_cli::config::AppConfig;
use transcript_cli::logging::redact_value;
use transcript_eval::{
    MeritSummary, RequirementReport, compute_merit, evaluate_report, is_exam_certificate,
    load_merit_courses, load_requirement_spec, merge_checked, merit_courses_from_requirements,
};
use transcript_match::{FuzzyMatcher, NormalizedDocument, SubjectNormalizer};
use transcript_model::StudentDocument;

use crate::cli::{AverageArgs, DocumentsArgs, EvaluateArgs, NormalizeArgs};

/// Catalog access and matching settings shared by the catalog-backed commands.
pub struct Session {
    provider: CatalogProvider,
    matcher: FuzzyMatcher,
}

impl Session {
    pub fn new(config: AppConfig) -> Result<Self> {
        let matcher = config.matcher();
        let provider =
            CatalogProvider::from_config(config.catalog).context("configure catalog provider")?;
        Ok(Self { provider, matcher })
    }

    fn catalogs(&self) -> Result<CatalogSet> {
        self.provider.catalogs().context("load catalogs")
    }

    fn normalize_with(&self, catalogs: &CatalogSet, path: &Path) -> Result<NormalizedDocument> {
        let document = load_document(path)?;
        let normalized = SubjectNormalizer::new(&catalogs.primary, Some(catalogs.secondary.as_ref()))
            .with_matcher(self.matcher)
            .normalize(&document);
        info!(
            path = %path.display(),
            unmatched = normalized.unmatched.len(),
            total_points = normalized.total_points,
            "Normalized document"
        );
        Ok(normalized)
    }

    fn merged(&self, catalogs: &CatalogSet, args: &DocumentsArgs) -> Result<StudentDocument> {
        let documents = args
            .documents
            .iter()
            .map(|path| {
                self.normalize_with(catalogs, path)
                    .map(|normalized| normalized.document)
            })
            .collect::<Result<Vec<_>>>()?;
        merge_checked(&documents).context("merge documents")
    }
}

#[derive(Debug, Serialize)]
pub struct CertificateCheck {
    pub path: PathBuf,
    pub title: String,
    pub school_form: String,
    pub is_exam_certificate: bool,
}

pub fn run_normalize(session: &Session, args: &NormalizeArgs) -> Result<NormalizedDocument> {
    let catalogs = session.catalogs()?;
    session.normalize_with(&catalogs, &args.document)
}

pub fn run_merge(session: &Session, args: &DocumentsArgs) -> Result<StudentDocument> {
    let catalogs = session.catalogs()?;
    session.merged(&catalogs, args)
}

pub fn run_evaluate(session: &Session, args: &EvaluateArgs) -> Result<RequirementReport> {
    let span = info_span!("evaluate", requirements = %args.requirements.display());
    let _guard = span.enter();

    let spec = load_requirement_spec(&args.requirements).context("load requirements")?;
    let catalogs = session.catalogs()?;
    let merged = session.merged(&catalogs, &args.input)?;
    let report = evaluate_report(&merged, &spec);
    info!(
        person = redact_value(&merged.personal_id),
        courses = report.results.len(),
        unmet = report.unmet().count(),
        "Requirements evaluated"
    );
    Ok(report)
}

pub fn run_average(session: &Session, args: &AverageArgs) -> Result<MeritSummary> {
    let courses = match (&args.merit, &args.from_requirements) {
        (Some(path), _) => load_merit_courses(path).context("load merit courses")?,
        (None, Some(path)) => {
            let spec = load_requirement_spec(path).context("load requirements")?;
            merit_courses_from_requirements(&spec)
        }
        (None, None) => anyhow::bail!("either --merit or --from-requirements is required"),
    };

    let catalogs = session.catalogs()?;
    let merged = session.merged(&catalogs, &args.input)?;
    let fallback = catalogs.combined();
    let summary = compute_merit(&merged, &courses, &fallback);
    info!(
        person = redact_value(&merged.personal_id),
        average = summary.average,
        "Merit average computed"
    );
    Ok(summary)
}

pub fn run_certificate(args: &NormalizeArgs) -> Result<CertificateCheck> {
    let document = load_document(&args.document)?;
    Ok(CertificateCheck {
        path: args.document.clone(),
        is_exam_certificate: is_exam_certificate(&document),
        title: document.title,
        school_form: document.school_form,
    })
}

fn load_document(path: &Path) -> Result<StudentDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read document {}", path.display()))?;
    let document: StudentDocument = serde_json::from_str(&content)
        .with_context(|| format!("parse document {}", path.display()))?;
    info!(
        path = %path.display(),
        person = redact_value(&document.personal_id),
        name = redact_value(&document.full_name),
        subjects = document.subjects.len(),
        "Loaded document"
    );
    Ok(document)
}
