//! Diesel schema for project and task persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Storage-assigned project identifier.
        id -> Int8,
        /// Unique project name.
        #[max_length = 100]
        name -> Varchar,
        /// Optional description.
        #[max_length = 500]
        description -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records, cascade-deleted with their project.
    tasks (id) {
        /// Storage-assigned task identifier.
        id -> Int8,
        /// Owning project.
        project_id -> Int8,
        /// Task title.
        #[max_length = 150]
        title -> Varchar,
        /// Optional description.
        #[max_length = 500]
        description -> Nullable<Varchar>,
        /// Workflow status.
        #[max_length = 16]
        status -> Varchar,
        /// Optional deadline.
        deadline -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Closing timestamp, set only while the task is done.
        closed_at -> Nullable<Timestamptz>,
    }
}

diesel::joinable!(tasks -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, tasks);
