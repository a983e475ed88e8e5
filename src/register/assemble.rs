//! Register assembly and the end-to-end pipeline.

use std::fs;
use std::time::Instant;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::RegisterConfig;
use crate::document::{DocumentAssembler, PdfTemplate};
use crate::error::{EngineError, EngineResult};
use crate::holidays::{HolidayProvider, holidays_in_period};
use crate::models::{OVERLAY_FAILED, PageBucket, RegisterWarning, UNPLACED_BUCKET};

use super::plan::{RegisterPlan, build_register_plan};
use super::request::RegisterRequest;
use super::summary::{RegisterOutcome, RegisterSummary};

/// Draws a plan onto a template, page by page.
///
/// Page 0 gets the first bucket, the final page the last bucket and every
/// page in between the middle bucket. Pages whose bucket has no labels are
/// left untouched. A page that fails to overlay is skipped with an
/// `OVERLAY_FAILED` warning; a bucket with days but no page to hold them
/// yields an `UNPLACED_BUCKET` warning.
///
/// # Returns
///
/// The warnings raised while assembling.
pub fn assemble_document<A: DocumentAssembler + ?Sized>(
    assembler: &mut A,
    plan: &RegisterPlan,
) -> Vec<RegisterWarning> {
    let page_count = assembler.page_count();
    let mut warnings = Vec::new();

    for page_index in 0..page_count {
        let bucket = PageBucket::for_page(page_index, page_count);
        let draws = plan.draws_for(bucket);

        if draws.is_empty() {
            debug!(page = page_index, %bucket, "Page passed through");
            continue;
        }

        if let Err(err) = assembler.overlay_page(page_index, draws) {
            warn!(page = page_index, %bucket, error = %err, "Page overlay failed");
            warnings.push(RegisterWarning::new(OVERLAY_FAILED, err.to_string()));
        }
    }

    let placed: Vec<PageBucket> = (0..page_count)
        .map(|page_index| PageBucket::for_page(page_index, page_count))
        .collect();
    for bucket in PageBucket::ALL {
        if !placed.contains(&bucket) && !plan.draws_for(bucket).is_empty() {
            warn!(%bucket, page_count, "Template has no page for bucket");
            warnings.push(RegisterWarning::new(
                UNPLACED_BUCKET,
                format!("Template with {page_count} page(s) has no {bucket} page"),
            ));
        }
    }

    warnings
}

/// Resolves holidays and plans the register without touching the template.
pub fn plan_register(
    request: &RegisterRequest,
    config: &RegisterConfig,
    provider: &dyn HolidayProvider,
) -> EngineResult<RegisterPlan> {
    let holidays = holidays_in_period(
        provider,
        &config.holidays.region,
        &config.holidays.extra,
        &request.period,
    )?;
    build_register_plan(request, &holidays)
}

/// Generates the register for a request.
///
/// Resolves holidays, plans the labels, overlays them on the configured
/// template and writes `<output_dir>/registro_jornada_laboral_<mes><año>.pdf`.
/// The output file is either written completely or not at all.
///
/// # Errors
///
/// Input errors (`InvalidDayRange`, `UnsupportedRegion`) and IO errors
/// (`TemplateNotFound`, `TemplateRead`, `OutputWrite`) end the run.
/// Per-entry and per-page problems are returned as warnings in the summary.
pub fn generate_register(
    request: &RegisterRequest,
    config: &RegisterConfig,
    provider: &dyn HolidayProvider,
) -> EngineResult<RegisterOutcome> {
    let run_id = Uuid::new_v4();
    let start_time = Instant::now();
    info!(
        run_id = %run_id,
        period = %request.period,
        incidences = request.incidences.len(),
        "Generating register"
    );

    let plan = plan_register(request, config, provider)?;
    let mut template = PdfTemplate::open(&config.template_path)?;
    let assembly_warnings = assemble_document(&mut template, &plan);

    fs::create_dir_all(&config.output_dir).map_err(|e| EngineError::OutputWrite {
        path: config.output_dir.display().to_string(),
        message: e.to_string(),
    })?;
    let output_path = config.output_path(&request.period.output_file_name());
    template.save(&output_path)?;

    let summary = RegisterSummary::from_plan(&plan).with_warnings(assembly_warnings);
    info!(
        run_id = %run_id,
        output = %output_path.display(),
        working_days = summary.working_days.len(),
        warnings = summary.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Register generated"
    );

    Ok(RegisterOutcome {
        output_path,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BaseSchedule, DrawInstruction, Period};
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct Recorder {
        pages: usize,
        fail_on: Option<usize>,
        overlays: Vec<(usize, usize)>,
    }

    impl DocumentAssembler for Recorder {
        fn page_count(&self) -> usize {
            self.pages
        }

        fn overlay_page(&mut self, page_index: usize, draws: &[DrawInstruction]) -> EngineResult<()> {
            if self.fail_on == Some(page_index) {
                return Err(EngineError::Overlay {
                    page: page_index,
                    message: "broken content stream".to_string(),
                });
            }
            self.overlays.push((page_index, draws.len()));
            Ok(())
        }
    }

    fn plan(month: u32, year: i32) -> RegisterPlan {
        let schedule: BaseSchedule = "15:00-19:00".parse().unwrap();
        let request = RegisterRequest::new(Period::new(month, year).unwrap(), schedule);
        build_register_plan(&request, &BTreeSet::new()).unwrap()
    }

    #[test]
    fn test_every_middle_page_gets_middle_bucket() {
        let plan = plan(7, 2024);
        let mut recorder = Recorder {
            pages: 4,
            ..Default::default()
        };

        let warnings = assemble_document(&mut recorder, &plan);
        assert!(warnings.is_empty());

        let first = plan.draws_for(PageBucket::First).len();
        let middle = plan.draws_for(PageBucket::Middle).len();
        // The last bucket is empty, so page 3 is passed through.
        assert_eq!(recorder.overlays, vec![(0, first), (1, middle), (2, middle)]);
    }

    #[test]
    fn test_overlay_failure_is_a_warning() {
        let plan = plan(7, 2024);
        let mut recorder = Recorder {
            pages: 3,
            fail_on: Some(0),
            ..Default::default()
        };

        let warnings = assemble_document(&mut recorder, &plan);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, OVERLAY_FAILED);
        assert_eq!(recorder.overlays.len(), 1);
        assert_eq!(recorder.overlays[0].0, 1);
    }

    #[test]
    fn test_single_page_template_reports_unplaced_middle() {
        let plan = plan(7, 2024);
        let mut recorder = Recorder {
            pages: 1,
            ..Default::default()
        };

        let warnings = assemble_document(&mut recorder, &plan);
        assert_eq!(recorder.overlays.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, UNPLACED_BUCKET);
    }

    #[test]
    fn test_missing_template_writes_nothing() {
        let schedule: BaseSchedule = "15:00-19:00".parse().unwrap();
        let request = RegisterRequest::new(Period::new(7, 2024).unwrap(), schedule);
        let output_dir = std::env::temp_dir().join(Uuid::new_v4().to_string());
        let config = RegisterConfig {
            template_path: output_dir.join("missing.pdf"),
            output_dir: output_dir.clone(),
            ..Default::default()
        };

        let result = generate_register(&request, &config, &crate::holidays::FixedHolidays::default());
        assert!(matches!(result, Err(EngineError::TemplateNotFound { .. })));
        assert!(!output_dir.exists());
    }
}
