pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{review_builder::*, venue_builder::*};

pub mod venue_builder {

    use super::*;
    use crate::{geo::*, id::*, venue::*};

    #[derive(Debug)]
    pub struct VenueBuild {
        venue: Venue,
    }

    impl VenueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.venue.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.venue.name = name.into();
            self
        }
        pub fn venue_type(mut self, venue_type: &str) -> Self {
            self.venue.venue_type = venue_type.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.venue.pos = pos;
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.venue.address = address.into();
            self
        }
        pub fn description(mut self, description: &str) -> Self {
            self.venue.description = description.into();
            self
        }
        pub fn opening_hours(mut self, opening_hours: &str) -> Self {
            self.venue.opening_hours = opening_hours.parse().ok();
            self
        }
        pub fn finish(self) -> Venue {
            self.venue
        }
    }

    impl Builder for Venue {
        type Build = VenueBuild;
        fn build() -> VenueBuild {
            VenueBuild {
                venue: Venue {
                    id: Id::new(),
                    name: "".into(),
                    venue_type: "".into(),
                    pos: MapPoint::default(),
                    address: "".into(),
                    description: "".into(),
                    opening_hours: None,
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn venue_id(mut self, venue_id: &str) -> Self {
            self.review.venue_id = venue_id.into();
            self
        }
        pub fn rating(mut self, rating: i8) -> Self {
            self.review.rating = rating.into();
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.review.comment = comment.into();
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    venue_id: Id::new(),
                    created_at: Timestamp::now(),
                    rating: RatingValue::min(),
                    comment: "".into(),
                },
            }
        }
    }
}
