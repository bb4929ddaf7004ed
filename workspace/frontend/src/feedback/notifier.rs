use common::{Notice, Notifier};

use super::toast::ToastContext;
use crate::settings::NoticeStyle;

/// Blocking `window.alert`, the way the form has always reported problems.
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        log::warn!("Alerting user: {}", notice);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(notice.message()) {
                log::error!("Failed to show alert: {:?}", e);
            }
        }
    }
}

/// Non-blocking toast. Bad input shows as a warning, everything else as an
/// error.
pub struct ToastNotifier(pub ToastContext);

impl Notifier for ToastNotifier {
    fn notify(&self, notice: &Notice) {
        log::warn!("Displaying toast: {}", notice);
        let message = notice.message().to_string();
        match notice {
            Notice::Validation => self.0.show_warning(message),
            Notice::Service(_) | Notice::Transport => self.0.show_error(message),
        }
    }
}

/// Notifier picked from the settings at submit time.
pub enum FormNotifier {
    Alert(AlertNotifier),
    Toast(ToastNotifier),
}

impl FormNotifier {
    /// Falls back to alerts when no toast provider is mounted.
    pub fn new(style: NoticeStyle, toasts: Option<ToastContext>) -> Self {
        match (style, toasts) {
            (NoticeStyle::Toast, Some(ctx)) => FormNotifier::Toast(ToastNotifier(ctx)),
            (NoticeStyle::Toast, None) => {
                log::warn!("Toast notices requested but no ToastProvider is mounted");
                FormNotifier::Alert(AlertNotifier)
            }
            (NoticeStyle::Alert, _) => FormNotifier::Alert(AlertNotifier),
        }
    }
}

impl Notifier for FormNotifier {
    fn notify(&self, notice: &Notice) {
        match self {
            FormNotifier::Alert(n) => n.notify(notice),
            FormNotifier::Toast(n) => n.notify(notice),
        }
    }
}
