//! Show toast use case

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::identity::{requested_app_name, AppIdentity};
use crate::domain::markup::{MarkupDocument, MarkupError};
use crate::domain::request::{ToastRequest, ToastSource};
use crate::domain::result_code::ResultCode;

use super::debug_log::{DebugLog, DebugSetupError, Stage};
use super::ports::{IdentityError, IdentityResolver, PlatformError, ToastPlatform};

/// Errors from the show toast use case, one family per stage
#[derive(Debug, Error)]
pub enum ToastError {
    #[error("Debug setup failed: {0}")]
    DebugSetup(#[from] DebugSetupError),

    #[error("Initialization failed: {0}")]
    Initialize(#[source] PlatformError),

    #[error("Platform binding failed: {0}")]
    Bind(#[source] PlatformError),

    #[error("Identity lookup failed: {0}")]
    Identity(#[from] IdentityError),

    #[error("No registered app is named \"{0}\"")]
    IdentityNotFound(String),

    #[error("Failed to read markup file {}: {source}", .path.display())]
    ReadMarkup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load markup: {0}")]
    Markup(#[from] MarkupError),

    #[error("Display request failed: {0}")]
    Display(#[source] PlatformError),
}

impl ToastError {
    /// The result code reported for this failure
    pub fn result_code(&self) -> ResultCode {
        match self {
            Self::DebugSetup(_) => ResultCode::FatalError,
            Self::Initialize(_) => ResultCode::InitializationFailed,
            Self::Bind(_) => ResultCode::AssemblyLoadFailed,
            Self::Identity(_) => ResultCode::IdentityAssignmentFailed,
            Self::IdentityNotFound(_) => ResultCode::IdentityNotFound,
            Self::ReadMarkup { .. } | Self::Markup(_) => ResultCode::MarkupLoadFailed,
            Self::Display(_) => ResultCode::NotificationCreationFailed,
        }
    }

    /// The stage that failed
    pub fn stage(&self) -> Stage {
        match self {
            Self::DebugSetup(_) => Stage::DebugSetup,
            Self::Initialize(_) => Stage::Initialize,
            Self::Bind(_) => Stage::Bind,
            Self::Identity(_) | Self::IdentityNotFound(_) => Stage::ResolveIdentity,
            Self::ReadMarkup { .. } | Self::Markup(_) => Stage::LoadMarkup,
            Self::Display(_) => Stage::Display,
        }
    }
}

/// Output from a successful display request
#[derive(Debug, Clone)]
pub struct ToastReceipt {
    /// Identity the toast was shown under
    pub identity: AppIdentity,
    /// The document handed to the platform
    pub document: MarkupDocument,
}

/// Toast pipeline: debug setup, initialization, binding, identity
/// resolution, markup loading and the display request, strictly in that
/// order. The first failing stage ends the invocation.
pub struct ShowToastUseCase<I, P>
where
    I: IdentityResolver,
    P: ToastPlatform,
{
    resolver: I,
    platform: P,
}

impl<I, P> ShowToastUseCase<I, P>
where
    I: IdentityResolver,
    P: ToastPlatform,
{
    /// Create a new use case instance
    pub fn new(resolver: I, platform: P) -> Self {
        Self { resolver, platform }
    }

    /// Run the pipeline and report only its result code.
    pub async fn execute(&self, request: &ToastRequest) -> ResultCode {
        match self.run(request).await {
            Ok(_) => ResultCode::Success,
            Err(e) => e.result_code(),
        }
    }

    /// Run the pipeline.
    pub async fn run(&self, request: &ToastRequest) -> Result<ToastReceipt, ToastError> {
        let log = DebugLog::open(&request.debug)?;
        log.stage(Stage::DebugSetup, "diagnostics enabled");

        let result = self.run_stages(&log, request).await;
        match &result {
            Ok(receipt) => log.stage(
                Stage::Display,
                &format!("display requested under {}", receipt.identity),
            ),
            Err(e) => {
                log.failure(e.stage(), e);
                log.stage(e.stage(), &format!("result {}", e.result_code()));
            }
        }
        result
    }

    async fn run_stages(
        &self,
        log: &DebugLog,
        request: &ToastRequest,
    ) -> Result<ToastReceipt, ToastError> {
        log.stage(Stage::Initialize, "initializing notification runtime");
        self.platform
            .initialize()
            .await
            .map_err(ToastError::Initialize)?;

        log.stage(Stage::Bind, "binding notification facilities");
        self.platform.bind().await.map_err(ToastError::Bind)?;

        let app_name = requested_app_name(request.app_name.as_deref());
        log.stage(Stage::ResolveIdentity, &format!("resolving \"{app_name}\""));
        let identity = self
            .resolver
            .resolve(app_name)
            .await?
            .ok_or_else(|| ToastError::IdentityNotFound(app_name.to_string()))?;
        log.stage(Stage::ResolveIdentity, &format!("resolved to {identity}"));

        let document = load_markup(log, &request.source).await?;

        log.stage(Stage::Display, "requesting display");
        self.platform
            .show(&document, &identity)
            .await
            .map_err(ToastError::Display)?;

        Ok(ToastReceipt { identity, document })
    }
}

/// Read or synthesize the markup for a source and parse it
async fn load_markup(log: &DebugLog, source: &ToastSource) -> Result<MarkupDocument, ToastError> {
    let bytes = match source {
        ToastSource::MarkupFile(path) => {
            log.stage(Stage::LoadMarkup, &format!("reading {}", path.display()));
            tokio::fs::read(path)
                .await
                .map_err(|source| ToastError::ReadMarkup {
                    path: path.clone(),
                    source,
                })?
        }
        ToastSource::Fields(fields) => {
            log.stage(Stage::LoadMarkup, "building generic template");
            fields.to_document().to_xml().into_bytes()
        }
    };

    log.stage(Stage::LoadMarkup, &format!("parsing {} bytes", bytes.len()));
    Ok(MarkupDocument::parse_bytes(&bytes)?)
}
