//! # Seeds
//!
//! Offline job that replaces every stored campground with freshly sampled
//! listings. It is never reachable from the running server.

/// Real cities used for seeded locations.
pub mod cities;
/// Word lists and fixed text for seeded listings.
pub mod seed_helpers;

use campground_services::{CampgroundError, CampgroundStore, NewCampground};
use rand::Rng;
use rand::seq::IndexedRandom;

use cities::CITIES;
use seed_helpers::{DESCRIPTORS, LOREM_DESCRIPTION, PLACES};

/// Number of campgrounds created by one seed run.
pub const SEED_COUNT: usize = 50;

fn sample<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Builds `count` random campgrounds from the fixed word and city lists.
pub fn sample_campgrounds<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<NewCampground> {
    (0..count)
        .map(|_| {
            let location = match CITIES.choose(rng) {
                Some(city) => format!("{}, {}", city.city, city.state),
                None => String::new(),
            };
            let title = format!("{} {}", sample(rng, DESCRIPTORS), sample(rng, PLACES));
            let price = f64::from(rng.random_range(10..30_u32));

            NewCampground {
                title,
                location,
                image: Some(format!(
                    "https://picsum.photos/400?random={}",
                    rng.random::<f64>()
                )),
                description: Some(LOREM_DESCRIPTION.to_string()),
                price,
            }
        })
        .collect()
}

/// Deletes every campground, then creates `SEED_COUNT` sampled ones.
///
/// The first failing write aborts the run. Returns the number created.
pub async fn seed_database<R: Rng + ?Sized>(
    store: &dyn CampgroundStore,
    rng: &mut R,
) -> Result<usize, CampgroundError> {
    let campgrounds = sample_campgrounds(rng, SEED_COUNT);

    let removed = store.delete_all().await?;
    log::info!("🧹 Removed {} existing campgrounds", removed);

    let mut created = 0;
    for campground in campgrounds {
        store.create(campground).await?;
        created += 1;
    }
    log::info!("🌱 Seeded {} campgrounds", created);

    Ok(created)
}
