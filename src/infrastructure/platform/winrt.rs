//! WinRT toast notification adapter

use async_trait::async_trait;
use windows::core::HSTRING;
use windows::Data::Xml::Dom::XmlDocument;
use windows::UI::Notifications::{ToastNotification, ToastNotificationManager};
use windows::Win32::System::Com::CoIncrementMTAUsage;

use crate::application::ports::{PlatformError, ToastPlatform};
use crate::domain::identity::AppIdentity;
use crate::domain::markup::MarkupDocument;

/// Minimal document used to check that notifications can be constructed
const PROBE_XML: &str = "<toast><visual><binding template=\"ToastGeneric\"/></visual></toast>";

/// Shows toasts through `Windows.UI.Notifications`
#[derive(Debug, Default)]
pub struct WinRtToastPlatform;

impl WinRtToastPlatform {
    pub fn new() -> Self {
        Self
    }
}

fn load_xml(xml: &str) -> windows::core::Result<XmlDocument> {
    let document = XmlDocument::new()?;
    document.LoadXml(&HSTRING::from(xml))?;
    Ok(document)
}

fn bind_failed(facility: &'static str) -> impl FnOnce(windows::core::Error) -> PlatformError {
    move |e| PlatformError::BindFailed {
        facility,
        message: e.message().to_string(),
    }
}

/// WinRT calls block; run them off the async executor
async fn blocking<T, F>(f: F) -> Result<T, PlatformError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, PlatformError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| PlatformError::TaskFailed(e.to_string()))?
}

#[async_trait]
impl ToastPlatform for WinRtToastPlatform {
    async fn initialize(&self) -> Result<(), PlatformError> {
        blocking(|| {
            // Keeps a multithreaded apartment alive for the rest of the
            // process so blocking-pool threads can call WinRT.
            unsafe { CoIncrementMTAUsage() }
                .map(|_cookie| ())
                .map_err(|e| PlatformError::InitFailed(e.message().to_string()))
        })
        .await
    }

    async fn bind(&self) -> Result<(), PlatformError> {
        blocking(|| {
            ToastNotificationManager::History()
                .map_err(bind_failed("ToastNotificationManager"))?;
            let probe = load_xml(PROBE_XML).map_err(bind_failed("XmlDocument"))?;
            ToastNotification::CreateToastNotification(&probe)
                .map_err(bind_failed("ToastNotification"))?;
            Ok(())
        })
        .await
    }

    async fn show(
        &self,
        document: &MarkupDocument,
        identity: &AppIdentity,
    ) -> Result<(), PlatformError> {
        let xml = document.to_xml();
        let app_id = identity.as_str().to_owned();

        blocking(move || {
            let show = || -> windows::core::Result<()> {
                let document = load_xml(&xml)?;
                let toast = ToastNotification::CreateToastNotification(&document)?;
                let notifier = ToastNotificationManager::CreateToastNotifierWithId(
                    &HSTRING::from(app_id.as_str()),
                )?;
                notifier.Show(&toast)
            };
            show().map_err(|e| PlatformError::ShowFailed(e.message().to_string()))
        })
        .await
    }
}
