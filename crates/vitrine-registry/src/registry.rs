//! The static configuration table and string-keyed lookup

use crate::config::{Capabilities, EntityConfig};
use crate::entity::Entity;
use crate::field::FieldSpec;
use std::sync::LazyLock;
use thiserror::Error;

/// Registry error type
#[derive(Debug, Error)]
pub enum RegistryError {
	/// A page asked for an entity key that is not registered. This is a
	/// wiring mistake; the message carries the valid keys so the caller
	/// can render a diagnostic view instead of crashing.
	#[error("no entity is registered under '{key}' (registered: {})", .known.join(", "))]
	UnknownEntity { key: String, known: Vec<String> },
}

impl RegistryError {
	pub(crate) fn unknown(key: &str) -> Self {
		RegistryError::UnknownEntity {
			key: key.to_string(),
			known: known_keys().iter().map(|k| k.to_string()).collect(),
		}
	}
}

pub type RegistryResult<T> = Result<T, RegistryError>;

static REGISTRY: LazyLock<Vec<EntityConfig>> =
	LazyLock::new(|| Entity::ALL.iter().map(|e| build(*e)).collect());

pub(crate) fn config_of(entity: Entity) -> &'static EntityConfig {
	let index = Entity::ALL
		.iter()
		.position(|e| *e == entity)
		.unwrap_or_default();
	&REGISTRY[index]
}

/// Look up an entity configuration by string key.
///
/// # Examples
///
/// ```
/// use vitrine_registry::lookup;
///
/// let config = lookup("services").unwrap();
/// assert_eq!(config.title, "Services");
/// assert!(lookup("widgets").is_err());
/// ```
pub fn lookup(key: &str) -> RegistryResult<&'static EntityConfig> {
	let entity: Entity = key.parse()?;
	Ok(config_of(entity))
}

/// All registered entity keys, in registry order.
pub fn known_keys() -> Vec<&'static str> {
	Entity::ALL.iter().map(|e| e.key()).collect()
}

fn build(entity: Entity) -> EntityConfig {
	match entity {
		Entity::Contacts => EntityConfig::new("contacts", "Contact Messages")
			.field(FieldSpec::text("name", "Name").required().readonly())
			.field(FieldSpec::email("email", "Email").required().readonly())
			.field(FieldSpec::tel("phone", "Phone").readonly())
			.field(FieldSpec::text("interest", "Area of interest").required().readonly())
			.field(FieldSpec::text("budget", "Budget").required().readonly())
			.field(FieldSpec::text("country", "Country").required().readonly())
			.field(FieldSpec::textarea("message", "Message").required().readonly())
			.field(
				FieldSpec::select(
					"status",
					"Status",
					["new", "in_progress", "completed", "cancelled"],
				)
				.required(),
			)
			.capabilities(Capabilities::new().no_create().no_edit()),

		Entity::Services => EntityConfig::new("services", "Services")
			.field(FieldSpec::text("title", "Service title").required())
			.field(FieldSpec::textarea("description", "Description").required())
			.field(
				FieldSpec::text("icon", "Icon (file name)")
					.required()
					.with_help("e.g. web-icon.png"),
			)
			.field(FieldSpec::checkbox("isActive", "Active"))
			.field(
				FieldSpec::number("order", "Display order")
					.required()
					.with_min(1.0)
					.with_placeholder("1"),
			)
			.field(FieldSpec::checkbox("isNew", "New"))
			.field(FieldSpec::checkbox("isFeatured", "Featured"))
			.field(
				FieldSpec::text("slug", "Slug")
					.required()
					.with_help("URL-friendly version of the title"),
			)
			.capabilities(Capabilities::new().toggle()),

		Entity::Projects => EntityConfig::new("projects", "Projects")
			.field(FieldSpec::text("title", "Title").required())
			.field(FieldSpec::textarea("description", "Description").required())
			.field(FieldSpec::text("category", "Category").required())
			.field(FieldSpec::text("clientName", "Client name"))
			.field(FieldSpec::url("projectUrl", "Project URL").with_placeholder("https://example.com"))
			.field(
				FieldSpec::string_array("technologies", "Technologies")
					.with_help(r#"JSON format: ["React", "Node.js"]"#),
			)
			.field(
				FieldSpec::string_array("tags", "Tags").with_help(r#"JSON format: ["Web", "API"]"#),
			)
			.field(
				FieldSpec::text("slug", "Slug")
					.required()
					.with_help("URL-friendly version of the title"),
			)
			.field(FieldSpec::checkbox("isNew", "New"))
			.field(FieldSpec::checkbox("isFeatured", "Featured"))
			.field(FieldSpec::checkbox("isActive", "Active"))
			.field(FieldSpec::number("order", "Display order").with_min(1.0))
			.field(
				FieldSpec::number("serviceId", "Service id").with_help("Id of the related service"),
			)
			.field(FieldSpec::file("image", "Image"))
			.capabilities(Capabilities::new().toggle()),

		Entity::Abouts => EntityConfig::new("abouts", "About Sections")
			.field(FieldSpec::text("title", "Title").required())
			.field(FieldSpec::textarea("description", "Description").required())
			.field(
				FieldSpec::string_array("paragraphs", "Paragraphs")
					.required()
					.with_help(r#"JSON format: ["First paragraph", "Second paragraph"]"#),
			)
			.field(
				FieldSpec::stat_array("stats", "Statistics")
					.required()
					.with_help(r#"JSON format: [{"number":"10+","label":"Projects"}]"#),
			)
			.field(
				FieldSpec::stat_array("yearExperience", "Years of experience")
					.with_help(r#"JSON format: [{"number":"10+","label":"Years"}]"#),
			)
			.field(
				FieldSpec::stat_array("clients", "Clients")
					.with_help(r#"JSON format: [{"number":"100+","label":"Clients"}]"#),
			)
			.field(FieldSpec::text("signature", "Signature"))
			.field(FieldSpec::file("imageUrl", "Image")),

		Entity::Education => EntityConfig::new("education", "Education")
			.field(
				FieldSpec::text("period", "Period")
					.required()
					.with_help("e.g. 2018-2022 or 2020-Present"),
			)
			.field(FieldSpec::text("institution", "Institution").required())
			.field(FieldSpec::text("degree", "Degree").required()),

		Entity::Users => EntityConfig::new("users", "Users")
			.field(FieldSpec::email("email", "Email").required())
			.field(
				FieldSpec::password("password", "Password")
					.required()
					.create_only(),
			)
			.field(FieldSpec::text("firstName", "First name").required())
			.field(FieldSpec::text("lastName", "Last name").required())
			.field(FieldSpec::select("role", "Role", ["USER", "ADMIN"]).required()),

		Entity::Settings => EntityConfig::new("settings", "Site Settings")
			.field(FieldSpec::text("title", "Site title").required())
			.field(FieldSpec::tel("phone", "Phone"))
			.field(FieldSpec::email("email", "Email"))
			.field(FieldSpec::text("address", "Address"))
			.field(FieldSpec::textarea("meta_description", "Meta description"))
			.field(FieldSpec::text("meta_keywords", "Meta keywords").with_help("Comma separated"))
			.field(FieldSpec::text("slogan", "Slogan"))
			.field(FieldSpec::checkbox("isActive", "Active"))
			.field(FieldSpec::color("color", "Primary color"))
			.field(FieldSpec::color("color_2", "Secondary color"))
			.field(FieldSpec::color("color_3", "Tertiary color"))
			.field(FieldSpec::url("facebook", "Facebook"))
			.field(FieldSpec::url("instagram", "Instagram"))
			.field(FieldSpec::url("twitter", "Twitter"))
			.field(FieldSpec::url("linkedin", "LinkedIn"))
			.field(FieldSpec::url("whatsapp", "WhatsApp"))
			.field(FieldSpec::url("telegram", "Telegram"))
			.field(FieldSpec::url("youtube", "YouTube"))
			.field(FieldSpec::url("tiktok", "TikTok"))
			.field(FieldSpec::url("domain", "Domain"))
			.field(FieldSpec::text("timezone", "Timezone"))
			.field(FieldSpec::file("logo", "Primary logo"))
			.field(FieldSpec::file("logo_2", "Secondary logo"))
			.field(FieldSpec::file("favicon", "Favicon"))
			.field(FieldSpec::file("meta_image", "Meta image")),

		Entity::Blogs => EntityConfig::new("blogs", "Blog Posts")
			.field(FieldSpec::text("category", "Category").required())
			.field(FieldSpec::date("date", "Date").required())
			.field(FieldSpec::text("title", "Title").required())
			.field(FieldSpec::textarea("excerpt", "Excerpt").required())
			.field(FieldSpec::url("link", "Link"))
			.field(FieldSpec::file("image", "Image")),

		Entity::Faqs => EntityConfig::new("faqs", "FAQ")
			.field(FieldSpec::text("question", "Question").required())
			.field(FieldSpec::textarea("answer", "Answer").required())
			.field(
				FieldSpec::number("order", "Display order")
					.with_min(1.0)
					.with_help("Display order (optional)"),
			),

		Entity::PricingPlans => EntityConfig::new("pricing-plans", "Pricing Plans")
			.field(FieldSpec::text("name", "Plan name").required())
			.field(FieldSpec::number("price", "Price").required())
			.field(
				FieldSpec::string_array("features", "Features")
					.required()
					.with_help(r#"JSON format: ["Feature 1", "Feature 2"]"#),
			)
			.field(FieldSpec::text("icon", "Icon"))
			.field(FieldSpec::checkbox("popular", "Popular")),

		Entity::Testimonials => EntityConfig::new("testimonials", "Testimonials")
			.field(FieldSpec::text("name", "Name").required())
			.field(FieldSpec::text("role", "Role").required())
			.field(FieldSpec::textarea("text", "Testimonial").required())
			.field(
				FieldSpec::number("rating", "Rating")
					.required()
					.with_min(1.0)
					.with_max(5.0),
			)
			.field(FieldSpec::file("avatar", "Avatar")),

		Entity::Tools => EntityConfig::new("tools", "Tools")
			.field(FieldSpec::text("name", "Tool name").required())
			.field(
				FieldSpec::number("percent", "Proficiency")
					.required()
					.with_min(0.0)
					.with_max(100.0),
			)
			.field(
				FieldSpec::text("icon", "Icon (file name)")
					.required()
					.with_help("e.g. nestjs.png"),
			),

		Entity::WorkExperiences => EntityConfig::new("work-experiences", "Work Experiences")
			.field(
				FieldSpec::text("period", "Period")
					.required()
					.with_help("e.g. 2022-Present or 2020-2022"),
			)
			.field(FieldSpec::text("company", "Company").required())
			.field(FieldSpec::text("role", "Role").required()),

		Entity::Marquees => EntityConfig::new("marquees", "Marquee Messages").field(
			FieldSpec::string_list("items", "Messages")
				.required()
				.with_help("Add messages one by one; they scroll continuously on the site"),
		),

		Entity::Mailing => EntityConfig::new("mailing", "Mailing List")
			.field(FieldSpec::email("email", "Email").required())
			.field(FieldSpec::text("name", "Name"))
			.field(FieldSpec::datetime("subscribed_at", "Subscribed at").readonly())
			.capabilities(Capabilities::new().read_only()),
	}
}
