use super::error::GeneratorError;
use async_trait::async_trait;

/// Turns the raw content of a tool into a short description.
///
/// Implementations return either non-empty text or a [`GeneratorError`]
/// describing why no description could be produced.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn describe(&self, content: &str) -> Result<String, GeneratorError>;

    fn name(&self) -> &str;

    fn model_info(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoGenerator;

    #[async_trait]
    impl DescriptionGenerator for EchoGenerator {
        async fn describe(&self, content: &str) -> Result<String, GeneratorError> {
            Ok(content.to_uppercase())
        }

        fn name(&self) -> &str {
            "EchoGenerator"
        }
    }

    #[tokio::test]
    async fn test_generator_trait() {
        let generator = EchoGenerator;
        assert_eq!(generator.name(), "EchoGenerator");
        assert!(generator.model_info().is_none());
        assert_eq!(generator.describe("clock").await.unwrap(), "CLOCK");
    }
}
