use crate::core::keywords::build_search_query;
use crate::models::{ImageSource, ResolvedImage, UserProfile, WeatherSnapshot};
use crate::services::PhotoSearchProvider;

/// Image returned when the photo search fails or finds nothing
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400x600?text=No+Image";

/// Image resolution stage
///
/// Always picks the first (most relevant) result so that identical input
/// resolves to the same image. Provider errors and empty results resolve to
/// `placeholder_url`.
pub async fn resolve_image(
    provider: &dyn PhotoSearchProvider,
    image_prompt: &str,
    profile: &UserProfile,
    weather: &WeatherSnapshot,
    placeholder_url: &str,
) -> ResolvedImage {
    let query = build_search_query(image_prompt, profile, weather);
    tracing::info!("Photo search query: {}", query);

    let first = match provider.search(&query).await {
        Ok(urls) => urls.into_iter().next(),
        Err(e) => {
            tracing::warn!("Photo search failed, using placeholder: {}", e);
            None
        }
    };

    match first {
        Some(url) => ResolvedImage {
            url,
            source: ImageSource::Search,
        },
        None => ResolvedImage {
            url: placeholder_url.to_string(),
            source: ImageSource::Placeholder,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::PhotoSearchError;
    use async_trait::async_trait;

    struct FixedPhotos(Option<Vec<String>>);

    #[async_trait]
    impl PhotoSearchProvider for FixedPhotos {
        async fn search(&self, _query: &str) -> Result<Vec<String>, PhotoSearchError> {
            self.0
                .clone()
                .ok_or_else(|| PhotoSearchError::ApiError("502 Bad Gateway".to_string()))
        }
    }

    fn weather() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_celsius: 16.0,
            condition: "Clear".to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_result_wins() {
        let photos = FixedPhotos(Some(vec!["https://a.test/1.jpg".into(), "https://a.test/2.jpg".into()]));
        let image = resolve_image(&photos, "denim jacket", &UserProfile::default(), &weather(), PLACEHOLDER_IMAGE_URL).await;

        assert_eq!(image.url, "https://a.test/1.jpg");
        assert_eq!(image.source, ImageSource::Search);
    }

    #[tokio::test]
    async fn test_error_and_empty_use_placeholder() {
        for photos in [FixedPhotos(None), FixedPhotos(Some(vec![]))] {
            let image = resolve_image(&photos, "denim jacket", &UserProfile::default(), &weather(), "https://p.test/none.png").await;
            assert_eq!(image.url, "https://p.test/none.png");
            assert_eq!(image.source, ImageSource::Placeholder);
        }
    }
}
