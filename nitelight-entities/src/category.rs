/// A well-known venue category.
///
/// The `tag` is matched verbatim against `Venue::venue_type`, so the
/// set of categories is open: the backend may deliver venue types
/// beyond the well-known ones listed here.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Category {
    pub tag: String,
}

impl Category {
    pub const TAG_BAR: &'static str = "Bar";
    pub const TAG_RESTAURANT: &'static str = "Restaurant";
    pub const TAG_NIGHTCLUB: &'static str = "Nightclub";

    pub fn new_bar() -> Self {
        Self {
            tag: Self::TAG_BAR.into(),
        }
    }

    pub fn new_restaurant() -> Self {
        Self {
            tag: Self::TAG_RESTAURANT.into(),
        }
    }

    pub fn new_nightclub() -> Self {
        Self {
            tag: Self::TAG_NIGHTCLUB.into(),
        }
    }

    pub fn well_known() -> Vec<Self> {
        vec![Self::new_bar(), Self::new_restaurant(), Self::new_nightclub()]
    }
}
