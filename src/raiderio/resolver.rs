//! Multi-region character resolution.
//!
//! Regions are tried strictly in order and the first hit wins. A region that
//! fails for any reason counts as "not there"; it is not retried.

use tracing::{info, warn};

use crate::raiderio::client::{FetchOutcome, ProfileSource};
use crate::raiderio::models::CharacterProfile;

/// Outcome of scanning every configured region.
#[derive(Debug)]
pub enum Resolution {
    Found {
        region: String,
        profile: Box<CharacterProfile>,
    },
    NotFound {
        /// Regions that were asked, in scan order.
        attempted: Vec<String>,
    },
}

/// Look the character up in each region until one returns a profile.
pub async fn resolve<S>(source: &S, name: &str, realm: &str, regions: &[String]) -> Resolution
where
    S: ProfileSource + ?Sized,
{
    let mut attempted = Vec::with_capacity(regions.len());

    for region in regions {
        info!(
            "Trying to find {} on {} in {} region",
            name,
            realm,
            region.to_uppercase()
        );
        attempted.push(region.clone());

        match source.fetch_profile(name, realm, region).await {
            FetchOutcome::Found(profile) => {
                info!("Character found in {} region", region.to_uppercase());
                return Resolution::Found {
                    region: region.clone(),
                    profile,
                };
            }
            FetchOutcome::Absent(reason) => {
                info!("{} not in {}: {:?}", name, region.to_uppercase(), reason);
            }
        }
    }

    warn!("Character {} not found on {} in any region", name, realm);
    Resolution::NotFound { attempted }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serenity::async_trait;

    use super::*;
    use crate::raiderio::client::AbsentReason;

    /// Records every call and answers with a profile only for `hit_region`.
    struct FakeSource {
        hit_region: Option<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new(hit_region: Option<&'static str>) -> Self {
            Self {
                hit_region,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProfileSource for FakeSource {
        async fn fetch_profile(&self, name: &str, _realm: &str, region: &str) -> FetchOutcome {
            self.calls.lock().unwrap().push(region.to_string());
            if self.hit_region == Some(region) {
                FetchOutcome::Found(Box::new(CharacterProfile {
                    name: name.to_string(),
                    region: region.to_string(),
                    ..CharacterProfile::default()
                }))
            } else {
                FetchOutcome::Absent(AbsentReason::Status {
                    status: 404,
                    body: String::new(),
                })
            }
        }
    }

    fn regions() -> Vec<String> {
        ["us", "eu", "kr", "tw"].iter().map(|r| r.to_string()).collect()
    }

    #[tokio::test]
    async fn test_stops_at_first_hit() {
        let source = FakeSource::new(Some("kr"));

        let resolution = resolve(&source, "Thrall", "stormrage", &regions()).await;

        assert_eq!(source.calls(), vec!["us", "eu", "kr"]);
        match resolution {
            Resolution::Found { region, profile } => {
                assert_eq!(region, "kr");
                assert_eq!(profile.name, "Thrall");
            }
            other => panic!("expected a hit, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_first_region_hit_makes_one_call() {
        let source = FakeSource::new(Some("us"));

        let resolution = resolve(&source, "Thrall", "stormrage", &regions()).await;

        assert_eq!(source.calls(), vec!["us"]);
        assert!(matches!(resolution, Resolution::Found { .. }));
    }

    #[tokio::test]
    async fn test_not_found_after_every_region() {
        let source = FakeSource::new(None);

        let resolution = resolve(&source, "Nobody", "stormrage", &regions()).await;

        assert_eq!(source.calls(), regions());
        match resolution {
            Resolution::NotFound { attempted } => assert_eq!(attempted, regions()),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_custom_region_order_is_respected() {
        let source = FakeSource::new(None);
        let order: Vec<String> = vec!["tw".to_string(), "us".to_string()];

        resolve(&source, "Thrall", "stormrage", &order).await;

        assert_eq!(source.calls(), vec!["tw", "us"]);
    }

    #[test]
    fn test_empty_region_list_makes_no_calls() {
        let source = FakeSource::new(Some("us"));

        let resolution = tokio_test::block_on(resolve(&source, "Thrall", "stormrage", &[]));

        assert!(source.calls().is_empty());
        assert!(matches!(resolution, Resolution::NotFound { attempted } if attempted.is_empty()));
    }
}
