pub trait UserLike {
    fn access_token(&self) -> &str;
    fn id(&self) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Regular,
    Staff,
    Superuser,
}

#[allow(unused)]
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub access_token: String,
}

impl UserLike for User {
    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn id(&self) -> i32 {
        self.id
    }
}

/// A token that no server would accept.
#[allow(unused)]
pub struct Anonymous;

impl UserLike for Anonymous {
    fn access_token(&self) -> &str {
        "not-a-jwt"
    }

    fn id(&self) -> i32 {
        0
    }
}
