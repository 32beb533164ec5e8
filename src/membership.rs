use entity::{class_members, classrooms, team_members, teams, users};
use sea_orm::{
    sea_query::{Expr, Order, Query, SelectStatement, SimpleExpr, SubQueryStatement},
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use serde::Serialize;
use std::collections::HashMap;

/// A student of a classroom together with its team state.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct RosterEntry {
    pub class_member_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub team_member_status: Option<team_members::Status>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct Member {
    #[serde(skip)]
    pub class_id: i32,
    pub member_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: class_members::Role,
    pub status: class_members::Status,
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct TeamMember {
    #[serde(skip)]
    pub team_id: i32,
    pub class_member_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role: team_members::Role,
    pub status: team_members::Status,
}

/// Team rows of the class member in the outer query.
fn team_rows_of_member() -> SelectStatement {
    Query::select()
        .column((team_members::Entity, team_members::Column::Id))
        .from(team_members::Entity)
        .and_where(
            Expr::col((team_members::Entity, team_members::Column::ClassMemberId))
                .equals((class_members::Entity, class_members::Column::Id)),
        )
        .to_owned()
}

/// Status of the newest team row matching `filter`, evaluated per outer class member.
fn latest_team_status(filter: Condition) -> SimpleExpr {
    let query = Query::select()
        .column((team_members::Entity, team_members::Column::Status))
        .from(team_members::Entity)
        .and_where(
            Expr::col((team_members::Entity, team_members::Column::ClassMemberId))
                .equals((class_members::Entity, class_members::Column::Id)),
        )
        .cond_where(filter)
        .order_by((team_members::Entity, team_members::Column::Id), Order::Desc)
        .limit(1)
        .to_owned();

    SimpleExpr::SubQuery(None, Box::new(SubQueryStatement::SelectStatement(query)))
}

fn pending_team_row() -> Condition {
    Condition::all().add(
        Expr::col((team_members::Entity, team_members::Column::Status))
            .eq(team_members::Status::Pending),
    )
}

fn accepted_leader_row() -> Condition {
    Condition::all()
        .add(
            Expr::col((team_members::Entity, team_members::Column::Role))
                .eq(team_members::Role::Leader),
        )
        .add(
            Expr::col((team_members::Entity, team_members::Column::Status))
                .eq(team_members::Status::Accepted),
        )
}

fn roster_select(class_id: i32) -> sea_orm::Select<class_members::Entity> {
    class_members::Entity::find()
        .select_only()
        .column_as(class_members::Column::Id, "class_member_id")
        .column(users::Column::FirstName)
        .column(users::Column::LastName)
        .join(JoinType::InnerJoin, class_members::Relation::User.def())
        .filter(class_members::Column::ClassId.eq(class_id))
        .filter(class_members::Column::Role.eq(class_members::Role::Student))
        .order_by_asc(class_members::Column::Id)
}

/// Accepted students that are in no team yet or only have pending team invitations.
pub async fn non_leaders<C>(db: &C, class_id: i32) -> Result<Vec<RosterEntry>, DbErr>
where
    C: ConnectionTrait,
{
    let without_team = Expr::exists(team_rows_of_member()).not();
    let with_pending = Expr::exists(
        team_rows_of_member()
            .cond_where(pending_team_row())
            .to_owned(),
    );

    roster_select(class_id)
        .expr_as_(latest_team_status(pending_team_row()), "team_member_status")
        .filter(class_members::Column::Status.eq(class_members::Status::Accepted))
        .filter(Condition::any().add(without_team).add(with_pending))
        .into_model::<RosterEntry>()
        .all(db)
        .await
}

/// Students leading a team, whatever their own class membership status is.
pub async fn leaders<C>(db: &C, class_id: i32) -> Result<Vec<RosterEntry>, DbErr>
where
    C: ConnectionTrait,
{
    let leads_team = Expr::exists(
        team_rows_of_member()
            .cond_where(accepted_leader_row())
            .to_owned(),
    );

    roster_select(class_id)
        .expr_as_(latest_team_status(accepted_leader_row()), "team_member_status")
        .filter(leads_team)
        .into_model::<RosterEntry>()
        .all(db)
        .await
}

/// Members of every listed classroom, loaded in one query and grouped by classroom.
pub async fn members_of<C>(db: &C, class_ids: &[i32]) -> Result<HashMap<i32, Vec<Member>>, DbErr>
where
    C: ConnectionTrait,
{
    let mut grouped: HashMap<i32, Vec<Member>> = HashMap::with_capacity(class_ids.len());

    if class_ids.is_empty() {
        return Ok(grouped);
    }

    let members = class_members::Entity::find()
        .select_only()
        .column(class_members::Column::ClassId)
        .column_as(class_members::Column::Id, "member_id")
        .column(users::Column::FirstName)
        .column(users::Column::LastName)
        .column(users::Column::Email)
        .column(class_members::Column::Role)
        .column(class_members::Column::Status)
        .join(JoinType::InnerJoin, class_members::Relation::User.def())
        .filter(class_members::Column::ClassId.is_in(class_ids.iter().copied()))
        .order_by_asc(class_members::Column::Id)
        .into_model::<Member>()
        .all(db)
        .await?;

    for member in members {
        grouped.entry(member.class_id).or_default().push(member);
    }

    Ok(grouped)
}

pub async fn student_count<C>(db: &C, class_id: i32) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    class_members::Entity::find_in_class(class_id)
        .filter(class_members::Column::Role.eq(class_members::Role::Student))
        .filter(class_members::Column::Status.eq(class_members::Status::Accepted))
        .count(db)
        .await
}

/// Distinct teams with at least one accepted member from this classroom.
pub async fn team_count<C>(db: &C, class_id: i32) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    team_members::Entity::find_in_class(class_id)
        .select_only()
        .column(team_members::Column::TeamId)
        .filter(team_members::Column::Status.eq(team_members::Status::Accepted))
        .distinct()
        .count(db)
        .await
}

/// Classrooms the user was invited to but has not been accepted into.
pub async fn invited_classes<C>(db: &C, user_id: i32) -> Result<Vec<classrooms::Model>, DbErr>
where
    C: ConnectionTrait,
{
    let accepted = Query::select()
        .column((class_members::Entity, class_members::Column::Id))
        .from(class_members::Entity)
        .and_where(
            Expr::col((class_members::Entity, class_members::Column::ClassId))
                .equals((classrooms::Entity, classrooms::Column::Id)),
        )
        .and_where(Expr::col((class_members::Entity, class_members::Column::UserId)).eq(user_id))
        .and_where(
            Expr::col((class_members::Entity, class_members::Column::Status))
                .eq(class_members::Status::Accepted),
        )
        .to_owned();

    classrooms::Entity::find_invited(user_id)
        .filter(Expr::exists(accepted).not())
        .order_by_asc(classrooms::Column::Id)
        .all(db)
        .await
}

pub async fn team_members_of<C>(
    db: &C,
    team_ids: &[i32],
) -> Result<HashMap<i32, Vec<TeamMember>>, DbErr>
where
    C: ConnectionTrait,
{
    let mut grouped: HashMap<i32, Vec<TeamMember>> = HashMap::with_capacity(team_ids.len());

    if team_ids.is_empty() {
        return Ok(grouped);
    }

    let members = team_members::Entity::find()
        .select_only()
        .column(team_members::Column::TeamId)
        .column(team_members::Column::ClassMemberId)
        .column(users::Column::FirstName)
        .column(users::Column::LastName)
        .column(team_members::Column::Role)
        .column(team_members::Column::Status)
        .join(JoinType::InnerJoin, team_members::Relation::ClassMember.def())
        .join(JoinType::InnerJoin, class_members::Relation::User.def())
        .filter(team_members::Column::TeamId.is_in(team_ids.iter().copied()))
        .order_by_asc(team_members::Column::Id)
        .into_model::<TeamMember>()
        .all(db)
        .await?;

    for member in members {
        grouped.entry(member.team_id).or_default().push(member);
    }

    Ok(grouped)
}

pub async fn teams_of<C>(db: &C, class_id: i32) -> Result<Vec<teams::Model>, DbErr>
where
    C: ConnectionTrait,
{
    teams::Entity::find_in_class(class_id)
        .order_by_asc(teams::Column::Id)
        .all(db)
        .await
}
