use super::schema::{FieldKind, FieldRule, FormSchema};

/// Store collections a variant can insert into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collection {
    Waitlist,
    ContactSubmissions,
}

/// Where a validated submission goes. Exactly one destination per variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Destination {
    Store(Collection),
    Relay,
}

#[derive(Debug, Clone, Copy)]
pub struct FormVariant {
    pub slug: &'static str,
    pub schema: FormSchema,
    pub destination: Destination,
}

const USER_TYPES: &[&str] = &[
    "ecommerce",
    "logistics",
    "hrtech",
    "underwriter",
    "broker",
    "other",
];

const YES_NO: &[&str] = &["yes", "no"];

/// The waitlist page form. Every field required, relayed to the hosted
/// form endpoint.
const WAITLIST: FormVariant = FormVariant {
    slug: "waitlist",
    destination: Destination::Relay,
    schema: FormSchema {
        fields: &[
            FieldRule {
                name: "fullName",
                kind: FieldKind::Text { min_len: 2 },
                required: true,
                message: "Full name must be at least 2 characters",
            },
            FieldRule {
                name: "companyName",
                kind: FieldKind::Text { min_len: 2 },
                required: true,
                message: "Company name must be at least 2 characters",
            },
            FieldRule {
                name: "email",
                kind: FieldKind::Email,
                required: true,
                message: "Please enter a valid email address",
            },
            FieldRule {
                name: "phone",
                kind: FieldKind::Text { min_len: 10 },
                required: true,
                message: "Please enter a valid phone number",
            },
            FieldRule {
                name: "userType",
                kind: FieldKind::Choice { allowed: USER_TYPES },
                required: true,
                message: "Please select your type",
            },
            FieldRule {
                name: "insuranceProducts",
                kind: FieldKind::Text { min_len: 10 },
                required: true,
                message: "Please describe your insurance product interests",
            },
            FieldRule {
                name: "wantsDemo",
                kind: FieldKind::Choice { allowed: YES_NO },
                required: true,
                message: "Please select if you'd like a demo",
            },
        ],
    },
};

/// The landing page partnership enquiry, relayed like the waitlist form.
const PARTNERSHIP: FormVariant = FormVariant {
    slug: "partnership",
    destination: Destination::Relay,
    schema: FormSchema {
        fields: &[
            FieldRule {
                name: "name",
                kind: FieldKind::Text { min_len: 2 },
                required: true,
                message: "Name must be at least 2 characters",
            },
            FieldRule {
                name: "companyName",
                kind: FieldKind::Text { min_len: 2 },
                required: true,
                message: "Company name must be at least 2 characters",
            },
            FieldRule {
                name: "email",
                kind: FieldKind::Email,
                required: true,
                message: "Please enter a valid email address",
            },
            FieldRule {
                name: "phone",
                kind: FieldKind::Text { min_len: 10 },
                required: true,
                message: "Please enter a valid phone number",
            },
        ],
    },
};

/// Early-access signup stored in the `waitlist` table. Company and
/// interest are optional here; the contact variant below requires its
/// counterparts. Both schemas are kept deliberately.
const EARLY_ACCESS: FormVariant = FormVariant {
    slug: "early-access",
    destination: Destination::Store(Collection::Waitlist),
    schema: FormSchema {
        fields: &[
            FieldRule {
                name: "name",
                kind: FieldKind::Text { min_len: 2 },
                required: true,
                message: "Name must be at least 2 characters",
            },
            FieldRule {
                name: "email",
                kind: FieldKind::Email,
                required: true,
                message: "Please enter a valid email address",
            },
            FieldRule {
                name: "company",
                kind: FieldKind::Text { min_len: 2 },
                required: false,
                message: "Company name must be at least 2 characters",
            },
            FieldRule {
                name: "interest",
                kind: FieldKind::Text { min_len: 10 },
                required: false,
                message: "Please describe your insurance product interests",
            },
        ],
    },
};

/// Contact form stored in `contact_submissions`. All fields required.
const CONTACT: FormVariant = FormVariant {
    slug: "contact",
    destination: Destination::Store(Collection::ContactSubmissions),
    schema: FormSchema {
        fields: &[
            FieldRule {
                name: "name",
                kind: FieldKind::Text { min_len: 2 },
                required: true,
                message: "Name must be at least 2 characters",
            },
            FieldRule {
                name: "email",
                kind: FieldKind::Email,
                required: true,
                message: "Please enter a valid email address",
            },
            FieldRule {
                name: "company",
                kind: FieldKind::Text { min_len: 2 },
                required: true,
                message: "Company name must be at least 2 characters",
            },
            FieldRule {
                name: "message",
                kind: FieldKind::Text { min_len: 10 },
                required: true,
                message: "Message must be at least 10 characters",
            },
        ],
    },
};

pub const VARIANTS: &[FormVariant] = &[WAITLIST, PARTNERSHIP, EARLY_ACCESS, CONTACT];

pub fn find(slug: &str) -> Option<&'static FormVariant> {
    VARIANTS.iter().find(|v| v.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        for (i, a) in VARIANTS.iter().enumerate() {
            for b in &VARIANTS[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn find_resolves_known_variants() {
        assert!(find("waitlist").is_some());
        assert!(find("partnership").is_some());
        assert!(find("early-access").is_some());
        assert!(find("contact").is_some());
        assert!(find("newsletter").is_none());
    }

    #[test]
    fn store_variants_cover_their_columns() {
        let early = find("early-access").unwrap();
        let names: Vec<_> = early.schema.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "email", "company", "interest"]);

        let contact = find("contact").unwrap();
        let names: Vec<_> = contact.schema.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "email", "company", "message"]);
    }
}
