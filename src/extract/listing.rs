use std::fmt;

use scraper::ElementRef;

use crate::app::{Result, YtsError};
use crate::extract::selectors::Css;
use crate::extract::Scrape;
use crate::validate::ValidationErrors;

/// Validation failure of one fragment inside a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemError {
    /// Listing name, e.g. `trending` or `upcoming`.
    pub section: &'static str,
    /// Zero-based position of the fragment within its selection.
    pub index: usize,
    pub errors: ValidationErrors,
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.entries().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}, i={}, {}", self.section, self.index, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ItemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.errors)
    }
}

/// Every failing item of one or more listings. Never empty when returned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingError {
    items: Vec<ItemError>,
}

impl ListingError {
    pub fn items(&self) -> &[ItemError] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `(section, index)` of each failing item, in extraction order.
    pub fn positions(&self) -> Vec<(&'static str, usize)> {
        self.items.iter().map(|e| (e.section, e.index)).collect()
    }

    pub fn extend(&mut self, other: ListingError) {
        self.items.extend(other.items);
    }

    pub fn into_result(self) -> std::result::Result<(), ListingError> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ListingError {}

/// The fragments matching `css`, or a structural failure when fewer than
/// `min` exist.
pub fn select_section<'a>(
    scope: ElementRef<'a>,
    css: &'static Css,
    min: usize,
) -> Result<Vec<ElementRef<'a>>> {
    let fragments: Vec<_> = scope.select(css.selector()).collect();
    if fragments.len() < min {
        let err = YtsError::NoElements {
            selector: css.source,
        };
        tracing::debug!("{}", err);
        return Err(err);
    }
    Ok(fragments)
}

/// Extracts every fragment independently. Succeeds only if all of them do.
pub fn scrape_each<T: Scrape>(
    section: &'static str,
    fragments: &[ElementRef<'_>],
) -> std::result::Result<Vec<T>, ListingError> {
    let outcomes: Vec<_> = fragments.iter().map(|fragment| T::scrape(*fragment)).collect();

    let mut records = Vec::with_capacity(outcomes.len());
    let mut failures = ListingError::default();
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(record) => records.push(record),
            Err(errors) => failures.items.push(ItemError {
                section,
                index,
                errors,
            }),
        }
    }

    failures.into_result().map(|()| records)
}

/// [`select_section`] followed by [`scrape_each`].
pub fn scrape_listing<T: Scrape>(
    scope: ElementRef<'_>,
    section: &'static str,
    css: &'static Css,
    min: usize,
) -> Result<Vec<T>> {
    let fragments = select_section(scope, css, min)?;
    scrape_each(section, &fragments).map_err(|err| {
        tracing::debug!("{}", err);
        YtsError::Listing(err)
    })
}
