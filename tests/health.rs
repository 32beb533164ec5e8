mod utils;

use utils::prelude::*;

#[tokio::test]
async fn livez() {
    let env = setup().await;

    let res = env.get("/livez").send().await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn readyz() {
    let env = setup().await;

    let res = env.get("/readyz").send().await;

    assert_eq!(res.status(), StatusCode::OK);
}
