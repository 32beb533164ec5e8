mod utils;

use entity::{class_members, team_members};
use utils::prelude::*;

struct Fixture {
    env: Env,
    staff: User,
    class_id: i32,
    no_team: i32,
    pending_in_team: i32,
    leader: i32,
    pending_leader: i32,
}

/// One student per interesting team state:
///
/// - no team rows at all
/// - a pending invitation into a team
/// - an accepted team leader
/// - an accepted, non-leading team member
/// - a pending class member without teams
/// - a pending class member leading a team
async fn fixture() -> Fixture {
    let env = setup().await;
    let staff = env.create_user(Kind::Staff).await;

    let class_id = env.create_classroom(&staff).await["id"].as_i64().unwrap() as i32;

    let mut students = Vec::new();
    for _ in 0..4 {
        let user = env.create_user(Kind::Regular).await;
        students.push(env.add_accepted_student(class_id, &user).await);
    }

    let pending_user = env.create_user(Kind::Regular).await;
    env.add_member(
        class_id,
        &pending_user,
        class_members::Role::Student,
        class_members::Status::Pending,
    )
    .await;

    let pending_leader_user = env.create_user(Kind::Regular).await;
    let pending_leader = env
        .add_member(
            class_id,
            &pending_leader_user,
            class_members::Role::Student,
            class_members::Status::Pending,
        )
        .await;

    let first_team = env.create_team_row(class_id, "First").await;
    let second_team = env.create_team_row(class_id, "Second").await;

    let [no_team, pending_in_team, leader, member]: [i32; 4] = students.try_into().unwrap();

    env.add_team_member(
        first_team,
        leader,
        team_members::Role::Leader,
        team_members::Status::Accepted,
    )
    .await;
    env.add_team_member(
        first_team,
        pending_in_team,
        team_members::Role::Member,
        team_members::Status::Pending,
    )
    .await;
    env.add_team_member(
        first_team,
        member,
        team_members::Role::Member,
        team_members::Status::Accepted,
    )
    .await;
    env.add_team_member(
        second_team,
        pending_leader,
        team_members::Role::Leader,
        team_members::Status::Accepted,
    )
    .await;

    Fixture {
        env,
        staff,
        class_id,
        no_team,
        pending_in_team,
        leader,
        pending_leader,
    }
}

#[tokio::test]
async fn non_leaders() {
    let f = fixture().await;

    let res = f
        .env
        .get(&format!("/classes/{}/nonleaders", f.class_id))
        .user(&f.staff)
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_json_eq!(
        res.json::<Value>().await,
        json!([
            {
                "class_member_id": f.no_team,
                "first_name": "First1",
                "last_name": "Last1",
                "team_member_status": null,
            },
            {
                "class_member_id": f.pending_in_team,
                "first_name": "First2",
                "last_name": "Last2",
                "team_member_status": 0,
            },
        ])
    );
}

#[tokio::test]
async fn leaders() {
    let f = fixture().await;

    let res = f
        .env
        .get(&format!("/classes/{}/leaders", f.class_id))
        .user(&f.staff)
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_json_eq!(
        res.json::<Value>().await,
        json!([
            {
                "class_member_id": f.leader,
                "first_name": "First3",
                "last_name": "Last3",
                "team_member_status": 1,
            },
            {
                "class_member_id": f.pending_leader,
                "first_name": "First6",
                "last_name": "Last6",
                "team_member_status": 1,
            },
        ])
    );
}

#[tokio::test]
async fn newest_pending_row_wins() {
    let f = fixture().await;

    let third_team = f.env.create_team_row(f.class_id, "Third").await;
    f.env
        .add_team_member(
            third_team,
            f.no_team,
            team_members::Role::Member,
            team_members::Status::Pending,
        )
        .await;

    let res = f
        .env
        .get(&format!("/classes/{}/nonleaders", f.class_id))
        .user(&f.staff)
        .send()
        .await;

    let body: Value = res.json().await;
    let entries = body.as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["class_member_id"], f.no_team);
    assert_eq!(entries[0]["team_member_status"], 0);
}

#[tokio::test]
async fn not_moderator() {
    let f = fixture().await;
    let user = f.env.create_user(Kind::Regular).await;

    for path in ["leaders", "nonleaders"] {
        let res = f
            .env
            .get(&format!("/classes/{}/{path}", f.class_id))
            .user(&user)
            .send()
            .await;

        assert_error!(res, error::NOT_MODERATOR);
    }
}

#[tokio::test]
async fn unknown_classroom() {
    let f = fixture().await;

    let res = f
        .env
        .get("/classes/9999/leaders")
        .user(&f.staff)
        .send()
        .await;

    assert_error!(res, error::CLASSROOM_NOT_FOUND);
}
