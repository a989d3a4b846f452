//! Typed entity identifiers

use crate::config::EntityConfig;
use crate::registry::{self, RegistryError};
use std::fmt;
use std::str::FromStr;

/// Every entity manageable through the back office.
///
/// Pages that know their entity at compile time go through this enum and
/// get an infallible [`Entity::config`]; pages wired by string key use
/// [`crate::lookup`] and handle the configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
	Contacts,
	Services,
	Projects,
	Abouts,
	Education,
	Users,
	Settings,
	Blogs,
	Faqs,
	PricingPlans,
	Testimonials,
	Tools,
	WorkExperiences,
	Marquees,
	Mailing,
}

impl Entity {
	/// All entities, in registry order.
	pub const ALL: [Entity; 15] = [
		Entity::Contacts,
		Entity::Services,
		Entity::Projects,
		Entity::Abouts,
		Entity::Education,
		Entity::Users,
		Entity::Settings,
		Entity::Blogs,
		Entity::Faqs,
		Entity::PricingPlans,
		Entity::Testimonials,
		Entity::Tools,
		Entity::WorkExperiences,
		Entity::Marquees,
		Entity::Mailing,
	];

	/// Resource key; doubles as the REST collection path segment.
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_registry::Entity;
	///
	/// assert_eq!(Entity::PricingPlans.key(), "pricing-plans");
	/// assert_eq!(Entity::Services.key(), "services");
	/// ```
	pub fn key(self) -> &'static str {
		match self {
			Entity::Contacts => "contacts",
			Entity::Services => "services",
			Entity::Projects => "projects",
			Entity::Abouts => "abouts",
			Entity::Education => "education",
			Entity::Users => "users",
			Entity::Settings => "settings",
			Entity::Blogs => "blogs",
			Entity::Faqs => "faqs",
			Entity::PricingPlans => "pricing-plans",
			Entity::Testimonials => "testimonials",
			Entity::Tools => "tools",
			Entity::WorkExperiences => "work-experiences",
			Entity::Marquees => "marquees",
			Entity::Mailing => "mailing",
		}
	}

	/// The static configuration for this entity.
	pub fn config(self) -> &'static EntityConfig {
		registry::config_of(self)
	}

	/// Display title, shorthand for `config().title`.
	pub fn title(self) -> &'static str {
		&self.config().title
	}
}

impl fmt::Display for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl FromStr for Entity {
	type Err = RegistryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Entity::ALL
			.iter()
			.copied()
			.find(|e| e.key() == s)
			.ok_or_else(|| RegistryError::unknown(s))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_keys_are_unique() {
		let mut keys: Vec<_> = Entity::ALL.iter().map(|e| e.key()).collect();
		keys.sort_unstable();
		keys.dedup();
		assert_eq!(keys.len(), Entity::ALL.len());
	}

	#[rstest]
	#[case("contacts", Entity::Contacts)]
	#[case("pricing-plans", Entity::PricingPlans)]
	#[case("work-experiences", Entity::WorkExperiences)]
	fn test_from_str_round_trip(#[case] key: &str, #[case] expected: Entity) {
		let entity: Entity = key.parse().unwrap();
		assert_eq!(entity, expected);
		assert_eq!(entity.to_string(), key);
	}

	#[rstest]
	fn test_from_str_unknown() {
		assert!("widgets".parse::<Entity>().is_err());
	}
}
