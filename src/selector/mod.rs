//! Fluent construction of CSS selector strings.
//!
//! This module implements a write-time-validated builder for compound
//! selectors per [Selectors Level 4](https://www.w3.org/TR/selectors-4/)
//! and for the combination of two selectors with a combinator token
//! ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)).
//!
//! Fragments are accepted one category at a time in the fixed grammar
//! order type → id → class → attribute → pseudo-class → pseudo-element.
//! Cardinality and ordering are checked at the write, not at render
//! time, so a malformed chain fails at exactly the call that breaks the
//! rule. Rendering is then pure concatenation of already-punctuated
//! fragments.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use thiserror::Error;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The six fragment categories of a compound selector, declared in the
/// fixed order the grammar allows them to appear. The derived `Ord`
/// follows declaration order and drives the ordering checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// The bare tag name: `a`, `div`, `li`.
    Element,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// Rendered as `#id`. At most one per compound selector.
    Id,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// Rendered as `.class`; any number, insertion order preserved.
    Class,
    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// Rendered as `[attr]`; the bracketed value is taken verbatim.
    Attribute,
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// Rendered as `:pseudo`; any number.
    PseudoClass,
    /// [§ 14 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// Rendered as `::pseudo`. At most one, and always last.
    PseudoElement,
}

impl Category {
    /// All categories in grammar order.
    const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];
}

/// Error raised synchronously at the call that violates a builder rule.
///
/// Both kinds are fatal to the chain: the builder that would have been
/// produced never exists, so the caller handles the error instead of
/// continuing to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// A single-valued category (element, id, pseudo-element) received
    /// a second write.
    #[error("duplicate {category} fragment: a compound selector allows at most one")]
    Cardinality {
        /// The category that was written twice.
        category: Category,
    },

    /// A category received a write after a later category (in grammar
    /// order) already held a fragment.
    #[error("{attempted} fragment cannot follow {present} fragment")]
    Order {
        /// The category the caller tried to write.
        attempted: Category,
        /// The already-written later category blocking the write.
        present: Category,
    },
}

/// A fluent, immutable builder for CSS selector strings.
///
/// Each `with_*` call validates the write, then returns a **new**
/// builder carrying all prior fragments plus the new one; the receiver
/// is never mutated. A shared prefix can therefore fan out into several
/// derived selectors:
///
/// ```
/// use css_selector_builder::SelectorBuilder;
///
/// # fn main() -> Result<(), css_selector_builder::BuilderError> {
/// let buttons = SelectorBuilder::new().with_element("button")?;
/// let primary = buttons.with_class("primary")?;
/// let disabled = buttons.with_pseudo_class("disabled")?;
///
/// assert_eq!(buttons.build(), "button");
/// assert_eq!(primary.build(), "button.primary");
/// assert_eq!(disabled.build(), "button:disabled");
/// # Ok(())
/// # }
/// ```
///
/// Fragments are stored already punctuated (`#id`, `.class`, `[attr]`,
/// `:pseudo`, `::pseudo`), so [`fmt::Display`] is plain concatenation
/// in category order with no separators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorBuilder {
    /// Tag-name fragment, stored verbatim.
    element: Option<String>,
    /// `#id` fragment.
    id: Option<String>,
    /// `.class` fragments in insertion order.
    classes: Vec<String>,
    /// `[attr]` fragments in insertion order.
    attributes: Vec<String>,
    /// `:pseudo` fragments in insertion order.
    pseudo_classes: Vec<String>,
    /// `::pseudo` fragment.
    pseudo_element: Option<String>,
    /// Precomputed output of [`SelectorBuilder::combine`]. When set it
    /// is the sole source of truth for rendering.
    combined: Option<String>,
}

impl SelectorBuilder {
    /// Create a builder with no fragments set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `category` already holds at least one fragment.
    fn occupied(&self, category: Category) -> bool {
        match category {
            Category::Element => self.element.is_some(),
            Category::Id => self.id.is_some(),
            Category::Class => !self.classes.is_empty(),
            Category::Attribute => !self.attributes.is_empty(),
            Category::PseudoClass => !self.pseudo_classes.is_empty(),
            Category::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// A write to `attempted` is legal only while every later category
    /// is still empty. Fails with the first occupied later category.
    fn check_order(&self, attempted: Category) -> Result<(), BuilderError> {
        match Category::ALL
            .into_iter()
            .filter(|later| *later > attempted)
            .find(|later| self.occupied(*later))
        {
            Some(present) => Err(BuilderError::Order { attempted, present }),
            None => Ok(()),
        }
    }

    /// Cardinality check for the single-valued categories.
    fn check_single(&self, category: Category) -> Result<(), BuilderError> {
        if self.occupied(category) {
            Err(BuilderError::Cardinality { category })
        } else {
            Ok(())
        }
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Set the element (type) fragment.
    ///
    /// # Errors
    ///
    /// [`BuilderError::Cardinality`] if the element is already set;
    /// [`BuilderError::Order`] if any later category already holds a
    /// fragment (the type name must open the compound selector).
    pub fn with_element(&self, value: &str) -> Result<Self, BuilderError> {
        self.check_single(Category::Element)?;
        self.check_order(Category::Element)?;
        let mut next = self.clone();
        next.element = Some(value.to_string());
        Ok(next)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Set the id fragment, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// [`BuilderError::Cardinality`] if an id is already set;
    /// [`BuilderError::Order`] if a class, attribute, pseudo-class, or
    /// pseudo-element fragment already exists.
    pub fn with_id(&self, value: &str) -> Result<Self, BuilderError> {
        self.check_single(Category::Id)?;
        self.check_order(Category::Id)?;
        let mut next = self.clone();
        next.id = Some(format!("#{value}"));
        Ok(next)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append a class fragment, rendered as `.value`.
    ///
    /// # Errors
    ///
    /// [`BuilderError::Order`] if an attribute, pseudo-class, or
    /// pseudo-element fragment already exists.
    pub fn with_class(&self, value: &str) -> Result<Self, BuilderError> {
        self.check_order(Category::Class)?;
        let mut next = self.clone();
        next.classes.push(format!(".{value}"));
        Ok(next)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append an attribute fragment, rendered as `[value]`. The value
    /// is bracketed verbatim; operator and quoting syntax inside it
    /// (`href$=".png"`) is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// [`BuilderError::Order`] if a pseudo-class or pseudo-element
    /// fragment already exists.
    pub fn with_attribute(&self, value: &str) -> Result<Self, BuilderError> {
        self.check_order(Category::Attribute)?;
        let mut next = self.clone();
        next.attributes.push(format!("[{value}]"));
        Ok(next)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append a pseudo-class fragment, rendered as `:value`.
    ///
    /// # Errors
    ///
    /// [`BuilderError::Order`] if the pseudo-element fragment already
    /// exists.
    pub fn with_pseudo_class(&self, value: &str) -> Result<Self, BuilderError> {
        self.check_order(Category::PseudoClass)?;
        let mut next = self.clone();
        next.pseudo_classes.push(format!(":{value}"));
        Ok(next)
    }

    /// [§ 14 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Set the pseudo-element fragment, rendered as `::value`.
    ///
    /// # Errors
    ///
    /// [`BuilderError::Cardinality`] if a pseudo-element is already
    /// set. No ordering check applies: this is the last category.
    pub fn with_pseudo_element(&self, value: &str) -> Result<Self, BuilderError> {
        self.check_single(Category::PseudoElement)?;
        let mut next = self.clone();
        next.pseudo_element = Some(format!("::{value}"));
        Ok(next)
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Join two selectors with a combinator token, producing a builder
    /// whose entire output is the precomputed
    /// `"<left> <token> <right>"` string (single spaces around the
    /// token).
    ///
    /// The token is accepted as-is. Callers normally pass one of `" "`,
    /// `"+"`, `"~"`, `">"`, but no legality check is made, and neither
    /// operand is re-validated.
    #[must_use]
    pub fn combine(left: &Self, combinator: &str, right: &Self) -> Self {
        Self {
            combined: Some(format!("{left} {combinator} {right}")),
            ..Self::default()
        }
    }

    /// Render the accumulated selector.
    ///
    /// A pure read over the fragments (or the precomputed combination):
    /// calling it repeatedly yields identical output and the builder
    /// remains usable.
    #[must_use]
    pub fn build(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(combined) = &self.combined {
            return f.write_str(combined);
        }
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            f.write_str(id)?;
        }
        for class in &self.classes {
            f.write_str(class)?;
        }
        for attribute in &self.attributes {
            f.write_str(attribute)?;
        }
        for pseudo_class in &self.pseudo_classes {
            f.write_str(pseudo_class)?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            f.write_str(pseudo_element)?;
        }
        Ok(())
    }
}
