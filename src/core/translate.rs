/// Translation hook: a caller-supplied capability applied after generation.

use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tracing::{debug, warn};

/// Converts a generated message into another language.
///
/// Any `Fn(String, String) -> impl Future<Output = anyhow::Result<String>>`
/// closure is a translator, called with `(language_code, message)`.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, language_code: &str, message: &str) -> anyhow::Result<String>;
}

#[async_trait::async_trait]
impl<F, Fut> Translator for F
where
    F: Fn(String, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
{
    async fn translate(&self, language_code: &str, message: &str) -> anyhow::Result<String> {
        (self)(language_code.to_string(), message.to_string()).await
    }
}

/// Run `translator` on `message`, returning the original message if the
/// translator errors, panics or times out.
///
/// The timeout is enforced only inside a Tokio runtime. Elsewhere the
/// translator is awaited without a limit and a warning is logged.
pub async fn translate_or_fallback(
    translator: &dyn Translator,
    language_code: &str,
    message: String,
    timeout: Option<Duration>,
) -> String {
    let attempt = AssertUnwindSafe(translator.translate(language_code, &message)).catch_unwind();

    let limit = match timeout {
        Some(limit) if tokio::runtime::Handle::try_current().is_ok() => Some(limit),
        Some(limit) => {
            warn!(
                language_code,
                timeout_ms = duration_millis(limit),
                "no Tokio runtime, translating without a timeout"
            );
            None
        }
        None => None,
    };

    let outcome = match limit {
        Some(limit) => match tokio::time::timeout(limit, attempt).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    language_code,
                    timeout_ms = duration_millis(limit),
                    "translation timed out, using original message"
                );
                return message;
            }
        },
        None => attempt.await,
    };

    match outcome {
        Ok(Ok(translated)) => {
            debug!(language_code, "message translated");
            translated
        }
        Ok(Err(error)) => {
            warn!(language_code, %error, "translation failed, using original message");
            message
        }
        Err(_) => {
            warn!(language_code, "translator panicked, using original message");
            message
        }
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_warnings;
    use std::sync::atomic::Ordering;

    struct Shouting;

    #[async_trait::async_trait]
    impl Translator for Shouting {
        async fn translate(&self, _language_code: &str, message: &str) -> anyhow::Result<String> {
            Ok(message.to_uppercase())
        }
    }

    struct Panicking;

    #[async_trait::async_trait]
    impl Translator for Panicking {
        async fn translate(&self, _language_code: &str, _message: &str) -> anyhow::Result<String> {
            panic!("translator exploded");
        }
    }

    #[tokio::test]
    async fn struct_translator_is_applied() {
        let (_guard, warnings) = capture_warnings();
        let out = translate_or_fallback(&Shouting, "fr-FR", "bye".to_string(), None).await;
        assert_eq!(out, "BYE");
        assert_eq!(warnings.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn closure_translator_receives_language_and_message() {
        let translator = |lang: String, msg: String| async move {
            Ok::<_, anyhow::Error>(format!("[{}] {}", lang, msg))
        };
        let out = translate_or_fallback(&translator, "de-DE", "bye".to_string(), None).await;
        assert_eq!(out, "[de-DE] bye");
    }

    #[tokio::test]
    async fn failing_translator_falls_back() {
        let (_guard, warnings) = capture_warnings();
        let translator =
            |_: String, _: String| async move { Err::<String, _>(anyhow::anyhow!("service down")) };
        let out = translate_or_fallback(&translator, "fr", "bye".to_string(), None).await;
        assert_eq!(out, "bye");
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn panicking_translator_falls_back() {
        let (_guard, warnings) = capture_warnings();
        let out = translate_or_fallback(&Panicking, "fr", "bye".to_string(), None).await;
        assert_eq!(out, "bye");
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_translation_is_returned_as_is() {
        let translator = |_: String, _: String| async move { Ok::<_, anyhow::Error>(String::new()) };
        let out = translate_or_fallback(&translator, "fr", "bye".to_string(), None).await;
        assert_eq!(out, "");
    }

    #[tokio::test]
    async fn slow_translator_times_out() {
        let (_guard, warnings) = capture_warnings();
        let translator = |_: String, msg: String| async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, anyhow::Error>(msg.to_uppercase())
        };
        let out = translate_or_fallback(
            &translator,
            "fr",
            "bye".to_string(),
            Some(Duration::from_millis(20)),
        )
        .await;
        assert_eq!(out, "bye");
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn fast_translator_beats_timeout() {
        let out = translate_or_fallback(
            &Shouting,
            "fr",
            "bye".to_string(),
            Some(Duration::from_secs(5)),
        )
        .await;
        assert_eq!(out, "BYE");
    }

    #[test]
    fn timeout_without_tokio_runtime_still_translates() {
        let (_guard, warnings) = capture_warnings();
        let out = futures::executor::block_on(translate_or_fallback(
            &Shouting,
            "fr",
            "bye".to_string(),
            Some(Duration::from_millis(100)),
        ));
        assert_eq!(out, "BYE");
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failure_without_tokio_runtime_falls_back() {
        let translator =
            |_: String, _: String| async move { Err::<String, _>(anyhow::anyhow!("offline")) };
        let out = futures::executor::block_on(translate_or_fallback(
            &translator,
            "fr",
            "bye".to_string(),
            Some(Duration::from_millis(100)),
        ));
        assert_eq!(out, "bye");
    }

    #[test]
    fn duration_millis_saturates() {
        assert_eq!(duration_millis(Duration::from_millis(250)), 250);
        assert_eq!(duration_millis(Duration::MAX), u64::MAX);
    }
}
