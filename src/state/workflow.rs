/// Key visual workflow state machine
///
/// One `Session` per window, advanced only by discrete UI events:
///
/// ```text
/// Idle/Ready/Failed --begin_analysis--> Analyzing --complete_analysis--> Ready | Failed
/// Ready (with selection) --begin_edit--> Editing --complete_edit--> Ready (with result)
/// ```
///
/// The simulated latency lives in the UI layer; the session only records
/// that an operation is in flight and rejects everything else meanwhile.
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

use super::data::{CandidateImage, EditResult, Selection, ZoomTarget};
use super::edit;
use super::library::AssetLibrary;
use crate::kv::resolver::EXTENSIONS;
use crate::kv::LogicalName;

const REQUIRED_FILES: &str = "KV1.*, KV2.*, KV3.*";

/// Why an analysis run produced no candidates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(
        "이미지 3장을 찾지 못했습니다. 폴더를 확인하세요: {}\n필요 파일: {} (확장자: {})",
        .directory.display(),
        REQUIRED_FILES,
        EXTENSIONS.join(", ")
    )]
    MissingCandidates {
        directory: PathBuf,
        missing: Vec<LogicalName>,
    },

    #[error("분석이 중단되었습니다: {0}")]
    Interrupted(String),
}

/// A UI event that is not valid in the current phase
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("another operation is still running")]
    Busy,

    #[error("key visuals have not been extracted yet")]
    NotReady,

    #[error("{0} is not one of the extracted key visuals")]
    UnknownCandidate(LogicalName),

    #[error("pick a key visual before editing")]
    NoSelection,

    #[error("no {0} is in progress")]
    NotInProgress(&'static str),
}

/// Where the session is in the workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Analyzing,
    Ready,
    Failed(AnalysisError),
    Editing,
}

impl Phase {
    /// Analyzing and Editing block every other action
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Analyzing | Phase::Editing)
    }
}

/// Everything needed to compute an edit off the UI thread
#[derive(Debug, Clone)]
pub struct EditRequest {
    pub prompt: String,
    /// Alternate visual chosen by the keyword rules, if any
    pub target: Option<LogicalName>,
    /// Selection at submit time; the fallback result
    pub selection: Selection,
}

/// Per-window session state
#[derive(Debug)]
pub struct Session {
    phase: Phase,
    source_url: Option<String>,
    candidates: Vec<CandidateImage>,
    selection: Option<Selection>,
    zoom: Option<ZoomTarget>,
    result: Option<EditResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an empty session in the Idle phase
    pub fn new() -> Self {
        Session {
            phase: Phase::Idle,
            source_url: None,
            candidates: Vec::new(),
            selection: None,
            zoom: None,
            result: None,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// URL submitted with the last analysis run
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    pub fn candidates(&self) -> &[CandidateImage] {
        &self.candidates
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn zoom_target(&self) -> Option<&ZoomTarget> {
        self.zoom.as_ref()
    }

    pub fn edit_result(&self) -> Option<&EditResult> {
        self.result.as_ref()
    }

    /// Start a new analysis run, discarding everything from the previous one
    pub fn begin_analysis(&mut self, url: &str) -> Result<(), WorkflowError> {
        if self.phase.is_busy() {
            return Err(WorkflowError::Busy);
        }

        self.candidates.clear();
        self.selection = None;
        self.zoom = None;
        self.result = None;
        self.source_url = Some(url.trim().to_string());
        self.phase = Phase::Analyzing;

        info!("🔎 Analysis started for {}", url.trim());
        Ok(())
    }

    /// Finish the analysis run with the outcome of loading the candidates
    pub fn complete_analysis(
        &mut self,
        outcome: Result<[CandidateImage; 3], AnalysisError>,
    ) -> Result<(), WorkflowError> {
        if self.phase != Phase::Analyzing {
            return Err(WorkflowError::NotInProgress("analysis"));
        }

        match outcome {
            Ok(candidates) => {
                info!("✅ {} candidates ready", candidates.len());
                self.candidates = Vec::from(candidates);
                self.phase = Phase::Ready;
            }
            Err(err) => self.fail_analysis(err),
        }

        Ok(())
    }

    fn fail_analysis(&mut self, err: AnalysisError) {
        warn!("❌ Analysis failed: {}", err);
        self.candidates.clear();
        self.phase = Phase::Failed(err);
    }

    /// Show a candidate enlarged, replacing any previous zoom target
    pub fn zoom(&mut self, name: LogicalName) -> Result<(), WorkflowError> {
        let candidate = self.ready_candidate(name)?;
        self.zoom = Some(ZoomTarget {
            name,
            pixels: candidate.pixels.clone(),
        });
        Ok(())
    }

    pub fn close_zoom(&mut self) -> Result<(), WorkflowError> {
        self.ensure_ready()?;
        self.zoom = None;
        Ok(())
    }

    /// Select a candidate; any previous edit result no longer applies
    pub fn pick(&mut self, name: LogicalName) -> Result<(), WorkflowError> {
        let selection = Selection::from(self.ready_candidate(name)?);
        info!("👆 Picked {}", name);
        self.selection = Some(selection);
        self.result = None;
        Ok(())
    }

    /// Submit edit instructions for the current selection
    pub fn begin_edit(&mut self, prompt: &str) -> Result<EditRequest, WorkflowError> {
        self.ensure_ready()?;
        let selection = self.selection.clone().ok_or(WorkflowError::NoSelection)?;

        let request = EditRequest {
            prompt: prompt.to_string(),
            target: edit::target_for_prompt(prompt),
            selection,
        };

        info!(
            "✏️  Editing {} with prompt {:?} (override: {})",
            request.selection.name,
            request.prompt,
            request
                .target
                .map(|t| t.to_string())
                .unwrap_or_else(|| "none".to_string())
        );

        self.phase = Phase::Editing;
        Ok(request)
    }

    /// Store the edit result and return to Ready
    pub fn complete_edit(&mut self, result: EditResult) -> Result<(), WorkflowError> {
        if self.phase != Phase::Editing {
            return Err(WorkflowError::NotInProgress("edit"));
        }

        info!("🖼️  Edit result: {}", result.name);
        self.result = Some(result);
        self.phase = Phase::Ready;
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), WorkflowError> {
        match self.phase {
            Phase::Ready => Ok(()),
            Phase::Analyzing | Phase::Editing => Err(WorkflowError::Busy),
            Phase::Idle | Phase::Failed(_) => Err(WorkflowError::NotReady),
        }
    }

    fn ready_candidate(&self, name: LogicalName) -> Result<&CandidateImage, WorkflowError> {
        self.ensure_ready()?;
        self.candidates
            .iter()
            .find(|c| c.name == name)
            .ok_or(WorkflowError::UnknownCandidate(name))
    }
}

/// Compute the result of an edit request
///
/// Loads the keyword target when there is one. Any failure to find or
/// decode it falls back to the selection; an edit never fails.
pub fn resolve_edit(library: &AssetLibrary, request: &EditRequest) -> EditResult {
    let Some(target) = request.target else {
        return EditResult::from(&request.selection);
    };

    match library.load(target) {
        Ok(visual) => EditResult {
            name: visual.name,
            pixels: visual.pixels,
        },
        Err(err) => {
            warn!("⚠️  Edit target {} unavailable, keeping {}: {}", target, request.selection.name, err);
            EditResult::from(&request.selection)
        }
    }
}
