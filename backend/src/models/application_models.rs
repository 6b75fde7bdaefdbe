use diesel::prelude::*;

use crate::schema::school_applications;

#[derive(Queryable, Selectable)]
#[diesel(table_name = school_applications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SchoolApplication {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub number: String,
    pub designation: String,
    pub school_name: String,
    pub message: String,
    pub created_at: i32, // int timestamp utc epoch
}

#[derive(Insertable)]
#[diesel(table_name = school_applications)]
pub struct NewSchoolApplication {
    pub name: String,
    pub email: String,
    pub number: String,
    pub designation: String,
    pub school_name: String,
    pub message: String,
    pub created_at: i32,
}
