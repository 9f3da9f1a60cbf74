//! Locator tables for every page under test
//!
//! A locator is an immutable (strategy, expression) pair identifying one UI
//! element family. Tables are grouped per page as `const` items and never
//! mutated at runtime.

use std::fmt;
use thirtyfour::By;

/// Element selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Css,
    XPath,
    Id,
    ClassName,
}

/// An immutable (strategy, expression) pair identifying one element family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    pub strategy: Strategy,
    pub expression: &'static str,
}

impl Locator {
    /// CSS selector locator
    pub const fn css(expression: &'static str) -> Self {
        Self {
            strategy: Strategy::Css,
            expression,
        }
    }

    /// XPath locator
    pub const fn xpath(expression: &'static str) -> Self {
        Self {
            strategy: Strategy::XPath,
            expression,
        }
    }

    /// Element id locator
    pub const fn id(expression: &'static str) -> Self {
        Self {
            strategy: Strategy::Id,
            expression,
        }
    }

    /// Class name locator
    pub const fn class_name(expression: &'static str) -> Self {
        Self {
            strategy: Strategy::ClassName,
            expression,
        }
    }

    /// Convert to the WebDriver client's selector type
    pub fn by(&self) -> By {
        match self.strategy {
            Strategy::Css => By::Css(self.expression),
            Strategy::XPath => By::XPath(self.expression),
            Strategy::Id => By::Id(self.expression),
            Strategy::ClassName => By::ClassName(self.expression),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match self.strategy {
            Strategy::Css => "css",
            Strategy::XPath => "xpath",
            Strategy::Id => "id",
            Strategy::ClassName => "class",
        };
        write!(f, "{} '{}'", strategy, self.expression)
    }
}

/// Home page elements
pub mod home {
    use super::Locator;

    pub const LOGO: Locator = Locator::css(r#"a[href="/"]"#);
    pub const COMPANY_MENU: Locator = Locator::xpath("//a[contains(text(),'Company')]");
    pub const CAREERS_LINK: Locator = Locator::xpath("//a[contains(text(),'Careers')]");
    pub const ACCEPT_COOKIES_BTN: Locator = Locator::id("wt-cli-accept-all-btn");
}

/// Careers page elements
pub mod careers {
    use super::Locator;

    pub const LOCATIONS_BLOCK: Locator = Locator::xpath(
        "//h3[contains(@class, 'category-title-media') and contains(text(), 'Our Locations')]",
    );
    pub const TEAMS_BLOCK: Locator = Locator::xpath(
        "//a[contains(@class, 'btn-outline-secondary') and contains(text(), 'See all teams')]",
    );
    pub const LIFE_AT_INSIDER_BLOCK: Locator = Locator::xpath(
        "//h2[contains(@class, 'elementor-heading-title') and contains(text(), 'Life at Insider')]",
    );
}

/// QA jobs page elements
pub mod qa_jobs {
    use super::Locator;

    pub const SEE_ALL_QA_JOBS_BTN: Locator =
        Locator::xpath("//a[contains(text(),'See all QA jobs')]");
    pub const LOCATION_FILTER: Locator = Locator::id("select2-filter-by-location-container");
    pub const ISTANBUL_OPTION: Locator = Locator::xpath(
        "//li[contains(@class, 'select2-results__option') and text()='Istanbul, Turkiye']",
    );
    pub const DEPARTMENT_FILTER_VALUE: Locator = Locator::xpath(
        "//span[@id=\"select2-filter-by-department-container\" and contains(text(), \"Quality Assurance\")]",
    );
    pub const JOB_POSITION: Locator = Locator::class_name("position-title");
    pub const JOB_DEPARTMENT: Locator =
        Locator::xpath("//span[contains(@class, 'position-department')]");
    pub const JOB_LOCATION: Locator =
        Locator::xpath("//div[contains(@class, 'position-location')]");
    pub const SENIOR_QA_ENGINEER_VIEW_ROLE: Locator = Locator::xpath(
        "//a[@href='https://jobs.lever.co/useinsider/78ddbec0-16bf-4eab-b5a6-04facb993ddc']",
    );
    pub const QA_ENGINEER_VIEW_ROLE: Locator = Locator::xpath(
        "//a[@href='https://jobs.lever.co/useinsider/0ba4065b-955a-4661-ad4a-f32479f63757']",
    );
}

/// Lever application page elements
pub mod lever {
    use super::Locator;

    pub const APPLY_BUTTON: Locator =
        Locator::xpath("//div[@class='postings-btn-wrapper']/a[.='Apply for this job']");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_record_strategy_and_expression() {
        assert_eq!(home::LOGO.strategy, Strategy::Css);
        assert_eq!(home::ACCEPT_COOKIES_BTN.strategy, Strategy::Id);
        assert_eq!(home::ACCEPT_COOKIES_BTN.expression, "wt-cli-accept-all-btn");
        assert_eq!(qa_jobs::JOB_POSITION.strategy, Strategy::ClassName);
        assert_eq!(careers::LOCATIONS_BLOCK.strategy, Strategy::XPath);
    }

    #[test]
    fn display_includes_strategy_and_expression() {
        let rendered = home::ACCEPT_COOKIES_BTN.to_string();
        assert_eq!(rendered, "id 'wt-cli-accept-all-btn'");
    }
}
