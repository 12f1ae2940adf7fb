use crate::entities::*;

pub trait Rated {
    fn avg_rating(&self, _: &[Review]) -> AvgRatingValue;
}

impl Rated for Venue {
    fn avg_rating(&self, reviews: &[Review]) -> AvgRatingValue {
        debug_assert_eq!(
            reviews.len(),
            reviews.iter().filter(|r| r.venue_id == self.id).count()
        );
        if reviews.is_empty() {
            return AvgRatingValue::default();
        }
        let sum: i64 = reviews
            .iter()
            .map(|review| i64::from(i8::from(review.rating)))
            .sum();
        AvgRatingValue::from(sum as f64 / reviews.len() as f64)
    }
}
