//! サンプルアクティベーター
//!
//! 記述子からサンプル画面の新しいインスタンスを生成する。
//! 生成したインスタンスは保持しない。生成エラーはそのまま呼び出し側へ返す。

use crate::error::Result;
use crate::sample::{SampleDescriptor, SampleView};

/// サンプル画面を生成
pub fn activate(descriptor: &SampleDescriptor) -> Result<Box<dyn SampleView>> {
    descriptor.factory().create()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleryError;
    use crate::sample::{SampleContext, SampleFactory, SampleMetadata};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct NumberedView {
        number: usize,
        title: String,
    }

    impl SampleView for NumberedView {
        fn title(&self) -> &str {
            &self.title
        }

        fn render(&self, _ctx: &SampleContext) -> Result<Vec<String>> {
            Ok(vec![self.number.to_string()])
        }
    }

    fn counting_descriptor(counter: Arc<AtomicUsize>) -> SampleDescriptor {
        let factory = SampleFactory::new(move || {
            let number = counter.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(NumberedView {
                number,
                title: format!("view #{}", number),
            }) as Box<dyn SampleView>)
        });
        SampleDescriptor::new(
            SampleMetadata::new("Counter", "", ""),
            "Test".to_string(),
            factory,
        )
    }

    #[test]
    fn test_each_activation_creates_new_instance() {
        let counter = Arc::new(AtomicUsize::new(0));
        let descriptor = counting_descriptor(Arc::clone(&counter));

        let first = activate(&descriptor).unwrap();
        let second = activate(&descriptor).unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_ne!(first.title(), second.title());
        let ctx = SampleContext::new("/tmp");
        assert_eq!(first.render(&ctx).unwrap(), vec!["0".to_string()]);
        assert_eq!(second.render(&ctx).unwrap(), vec!["1".to_string()]);
    }

    #[test]
    fn test_activation_error_is_returned_verbatim() {
        let factory = SampleFactory::new(|| {
            Err(GalleryError::Activation {
                sample: "Broken".to_string(),
                message: "missing resource".to_string(),
            })
        });
        let descriptor = SampleDescriptor::new(
            SampleMetadata::new("Broken", "", ""),
            "Test".to_string(),
            factory,
        );

        let result = activate(&descriptor);

        match result {
            Err(GalleryError::Activation { sample, message }) => {
                assert_eq!(sample, "Broken");
                assert_eq!(message, "missing resource");
            }
            _ => panic!("expected activation error"),
        }
    }

    #[test]
    fn test_failed_activation_does_not_affect_next_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_factory = Arc::clone(&calls);
        let factory = SampleFactory::new(move || {
            if calls_in_factory.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(GalleryError::Activation {
                    sample: "Flaky".to_string(),
                    message: "first call fails".to_string(),
                })
            } else {
                Ok(Box::new(NumberedView {
                    number: 1,
                    title: "ok".to_string(),
                }) as Box<dyn SampleView>)
            }
        });
        let descriptor = SampleDescriptor::new(
            SampleMetadata::new("Flaky", "", ""),
            "Test".to_string(),
            factory,
        );

        assert!(activate(&descriptor).is_err());
        assert_eq!(activate(&descriptor).unwrap().title(), "ok");
    }
}
