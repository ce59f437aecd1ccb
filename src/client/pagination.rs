use crate::app::{Result, YtsError};

/// Comments returned per thread page.
pub const COMMENTS_PAGE_SIZE: u32 = 30;

/// Offset of the given 1-based page. Rejects page numbers below 1 and pages
/// whose offset does not fit in a `u32`.
pub fn check_page(page: u32) -> Result<u32> {
    if page < 1 {
        return Err(YtsError::InvalidArgument(format!(
            "page must be at least 1, got {page}"
        )));
    }
    comments_offset(page).ok_or_else(|| {
        YtsError::InvalidArgument(format!("page {page} is beyond the last addressable offset"))
    })
}

/// Comments skipped before the given 1-based page, or `None` for page 0 and on
/// overflow.
pub fn comments_offset(page: u32) -> Option<u32> {
    page.checked_sub(1)?.checked_mul(COMMENTS_PAGE_SIZE)
}

/// Whether comments remain beyond the page starting at `offset`. A remainder
/// of exactly one page means this page is the last.
pub fn has_more(total_count: u32, offset: u32) -> bool {
    total_count.saturating_sub(offset) > COMMENTS_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(comments_offset(1), Some(0));
        assert_eq!(comments_offset(2), Some(30));
        assert_eq!(comments_offset(5), Some(120));
        assert_eq!(comments_offset(0), None);
    }

    #[test]
    fn test_exactly_one_page_left_has_no_more() {
        let offset = check_page(2).unwrap();
        assert_eq!(offset, 30);
        assert!(!has_more(60, offset));
    }

    #[test]
    fn test_one_extra_comment_has_more() {
        let offset = check_page(2).unwrap();
        assert!(has_more(61, offset));
    }

    #[test]
    fn test_has_more_past_the_end() {
        assert!(!has_more(10, check_page(3).unwrap()));
        assert!(!has_more(0, 0));
        assert!(has_more(31, 0));
    }

    #[test]
    fn test_check_page() {
        assert_eq!(check_page(1).unwrap(), 0);
        assert!(matches!(check_page(0), Err(YtsError::InvalidArgument(_))));
    }

    #[test]
    fn test_offset_overflow_is_rejected() {
        // (143_165_577 - 1) * 30 = 4_294_967_280, the largest page that fits.
        assert_eq!(check_page(143_165_577).unwrap(), 4_294_967_280);
        assert!(matches!(
            check_page(143_165_578),
            Err(YtsError::InvalidArgument(_))
        ));
        assert!(matches!(
            check_page(200_000_000),
            Err(YtsError::InvalidArgument(_))
        ));
        assert_eq!(comments_offset(200_000_000), None);
    }
}
