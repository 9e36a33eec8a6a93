//! Filter criteria and the in-memory matching used by the users table.

use crate::model::User;

/// One of the four filterable columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterField {
    Name,
    Username,
    Email,
    Phone,
}

impl FilterField {
    /// Input order on screen.
    pub const ALL: [FilterField; 4] = [
        FilterField::Name,
        FilterField::Username,
        FilterField::Email,
        FilterField::Phone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Name => "Name",
            FilterField::Username => "Username",
            FilterField::Email => "Email",
            FilterField::Phone => "Phone",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FilterField::Name => "Filter by name",
            FilterField::Username => "Filter by username",
            FilterField::Email => "Filter by email",
            FilterField::Phone => "Filter by phone",
        }
    }

    /// Whether a raw input value may be stored for this field.
    ///
    /// Phone only takes ASCII digits (the empty string included); every other
    /// field takes anything.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            FilterField::Phone => is_digits_only(value),
            FilterField::Name | FilterField::Username | FilterField::Email => true,
        }
    }

    pub fn next(self) -> Self {
        match self {
            FilterField::Name => FilterField::Username,
            FilterField::Username => FilterField::Email,
            FilterField::Email => FilterField::Phone,
            FilterField::Phone => FilterField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FilterField::Name => FilterField::Phone,
            FilterField::Username => FilterField::Name,
            FilterField::Email => FilterField::Username,
            FilterField::Phone => FilterField::Email,
        }
    }
}

/// Current value of every filter input. Empty means "match all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl FilterCriteria {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Username => &self.username,
            FilterField::Email => &self.email,
            FilterField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: FilterField, value: String) {
        let slot = match field {
            FilterField::Name => &mut self.name,
            FilterField::Username => &mut self.username,
            FilterField::Email => &mut self.email,
            FilterField::Phone => &mut self.phone,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Number of inputs holding a non-empty value.
    pub fn active_count(&self) -> usize {
        FilterField::ALL
            .iter()
            .filter(|f| !self.get(**f).is_empty())
            .count()
    }
}

/// Lowercased needles, computed once per pass over the user list.
struct Needles<'a> {
    name: String,
    username: String,
    email: String,
    phone: &'a str,
}

impl<'a> Needles<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            name: criteria.name.to_lowercase(),
            username: criteria.username.to_lowercase(),
            email: criteria.email.to_lowercase(),
            phone: &criteria.phone,
        }
    }

    /// Name, username and email compare case-insensitively; phone is a
    /// literal substring match.
    fn matches(&self, u: &User) -> bool {
        u.name.to_lowercase().contains(&self.name)
            && u.username.to_lowercase().contains(&self.username)
            && u.email.to_lowercase().contains(&self.email)
            && u.phone.contains(self.phone)
    }
}

/// Stable filter: keeps the input order of `users`.
pub fn apply(users: &[User], criteria: &FilterCriteria) -> Vec<User> {
    if criteria.is_empty() {
        return users.to_vec();
    }
    let needles = Needles::new(criteria);
    users
        .iter()
        .filter(|u| needles.matches(u))
        .cloned()
        .collect()
}

/// `^[0-9]*$`
pub fn is_digits_only(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}
