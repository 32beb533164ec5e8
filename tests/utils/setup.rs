use super::{
    request::RequestBuilder,
    user::{Kind, User},
};
use classroom_backend::{Config, Jwt, State};
use entity::{class_members, team_members, teams, users};
use http::StatusCode;
use migration::MigratorTrait;
use reqwest::Client;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DbConn, Set};
use serde_json::{json, Value};
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};
use tokio::net::TcpListener;

pub const JWT_SECRET: &str = "classroom-test-secret";

async fn setup_database() -> DbConn {
    // every connection to an in-memory sqlite database sees a different database
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    migration::Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    db
}

async fn setup_backend(db: DbConn) -> SocketAddr {
    let config = Config {
        database_url: "sqlite::memory:".to_owned(),
        jwt_secret: JWT_SECRET.to_owned(),
        port: 0,
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = State::with_database(&config, db);

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        classroom_backend::run(listener, state).await.unwrap();
    });

    addr
}

pub async fn setup() -> Env {
    let db = setup_database().await;
    let addr = setup_backend(db.clone()).await;

    Env {
        addr,
        client: Client::new(),
        db,
        user_num: Arc::new(AtomicU64::new(0)),
        class_num: Arc::new(AtomicU64::new(0)),
    }
}

#[derive(Clone)]
pub struct Env {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DbConn,
    user_num: Arc<AtomicU64>,
    class_num: Arc<AtomicU64>,
}

#[allow(unused)]
impl Env {
    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    pub fn patch(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.patch(self.get_url(url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.put(self.get_url(url)))
    }
}

#[allow(unused)]
impl Env {
    pub async fn create_user(&self, kind: Kind) -> User {
        let number = self.user_num.fetch_add(1, Ordering::Relaxed);
        let email = format!("user{number}@example.com");

        let user = users::ActiveModel {
            email: Set(email.clone()),
            first_name: Set(format!("First{number}")),
            last_name: Set(format!("Last{number}")),
            is_staff: Set(kind == Kind::Staff),
            is_superuser: Set(kind == Kind::Superuser),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("failed to insert user");

        User {
            id: user.id,
            email,
            access_token: self.token_for(user.id),
        }
    }

    pub fn token_for(&self, user_id: i32) -> String {
        Jwt::new(JWT_SECRET)
            .issue(user_id, chrono::Duration::hours(1))
            .expect("failed to issue token")
    }

    /// Creates a classroom through the api, the owner becomes its teacher.
    pub async fn create_classroom(&self, owner: &User) -> Value {
        let number = self.class_num.fetch_add(1, Ordering::Relaxed);

        let res = self
            .post("/classes")
            .user(owner)
            .json(&json!({
                "class_code": format!("CODE{number:03}"),
                "course_name": format!("Course {number}"),
                "sections": "A",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        res.json().await
    }

    pub async fn add_member(
        &self,
        class_id: i32,
        user: &User,
        role: class_members::Role,
        status: class_members::Status,
    ) -> i32 {
        class_members::ActiveModel {
            user_id: Set(user.id),
            class_id: Set(class_id),
            role: Set(role),
            status: Set(status),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("failed to insert class member")
        .id
    }

    pub async fn add_accepted_student(&self, class_id: i32, user: &User) -> i32 {
        self.add_member(
            class_id,
            user,
            class_members::Role::Student,
            class_members::Status::Accepted,
        )
        .await
    }

    pub async fn create_team_row(&self, class_id: i32, name: &str) -> i32 {
        teams::ActiveModel {
            class_id: Set(class_id),
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("failed to insert team")
        .id
    }

    pub async fn add_team_member(
        &self,
        team_id: i32,
        class_member_id: i32,
        role: team_members::Role,
        status: team_members::Status,
    ) -> i32 {
        team_members::ActiveModel {
            class_member_id: Set(class_member_id),
            team_id: Set(team_id),
            role: Set(role),
            status: Set(status),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("failed to insert team member")
        .id
    }
}
