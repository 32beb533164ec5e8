use crate::{
    config::Config,
    jwt::{Jwt, JwtTrait},
};
use rand::{
    rngs::{adapter::ReseedingRng, OsRng},
    Rng, SeedableRng,
};
use rand_chacha::ChaCha20Core;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::sync::Arc;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;
    type Jwt: JwtTrait;
    type Rand: Rng;

    fn db(&self) -> &Self::Db;
    fn jwt(&self) -> &Self::Jwt;
    fn rng(&self) -> Self::Rand;
}

pub struct State {
    database: DbConn,
    jwt: Jwt,
}

impl State {
    pub async fn new(config: &Config) -> anyhow::Result<Arc<Self>> {
        let database = Self::connect_database(&config.database_url).await?;
        Ok(Self::with_database(config, database))
    }

    pub fn with_database(config: &Config, database: DbConn) -> Arc<Self> {
        Arc::new(Self {
            database,
            jwt: Jwt::new(&config.jwt_secret),
        })
    }

    async fn connect_database(url: &str) -> anyhow::Result<DbConn> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(url.to_owned());
        opts.sqlx_logging(false);

        let db = Database::connect(opts)
            .await
            .inspect_err(|error| error!("failed to connect to database: {}", error))?;

        info!("Connected to database");

        Ok(db)
    }
}

thread_local! {
    static CHACHA_THREAD_RNG: ReseedingRng<ChaCha20Core, OsRng> = {
        let rng = ChaCha20Core::from_entropy();
        ReseedingRng::new(rng, 1024*64, OsRng)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;
    type Jwt = Jwt;
    type Rand = ReseedingRng<ChaCha20Core, OsRng>;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn jwt(&self) -> &Self::Jwt {
        &self.jwt
    }

    fn rng(&self) -> Self::Rand {
        CHACHA_THREAD_RNG.with(|x| x.clone())
    }
}
