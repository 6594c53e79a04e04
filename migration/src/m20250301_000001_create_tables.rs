use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 身份类表（学生、教师、管理者、管理员）共用的列
fn identity_columns<T: IntoIden + Copy>(
    table: &mut TableCreateStatement,
    id: T,
    first_name: T,
    last_name: T,
    email: T,
    password_hash: T,
    role: T,
) {
    table
        .col(
            ColumnDef::new(id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(first_name).string_len(100).not_null())
        .col(ColumnDef::new(last_name).string_len(100).not_null())
        .col(ColumnDef::new(email).string_len(256).not_null().unique_key())
        .col(ColumnDef::new(password_hash).string().not_null())
        .col(ColumnDef::new(role).string().not_null());
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建院系表
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::Name).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Departments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Departments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班组表
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Groups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Groups::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Groups::DepartmentId).big_integer().not_null())
                    .col(ColumnDef::new(Groups::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Groups::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Groups::Table, Groups::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        let mut teachers = Table::create();
        teachers.table(Teachers::Table).if_not_exists();
        identity_columns(
            &mut teachers,
            Teachers::Id,
            Teachers::FirstName,
            Teachers::LastName,
            Teachers::Email,
            Teachers::PasswordHash,
            Teachers::Role,
        );
        teachers
            .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
            .col(ColumnDef::new(Teachers::UpdatedAt).big_integer().not_null());
        manager.create_table(teachers).await?;

        // 创建管理者表
        let mut managers = Table::create();
        managers.table(Managers::Table).if_not_exists();
        identity_columns(
            &mut managers,
            Managers::Id,
            Managers::FirstName,
            Managers::LastName,
            Managers::Email,
            Managers::PasswordHash,
            Managers::Role,
        );
        managers
            .col(ColumnDef::new(Managers::CreatedAt).big_integer().not_null())
            .col(ColumnDef::new(Managers::UpdatedAt).big_integer().not_null());
        manager.create_table(managers).await?;

        // 创建管理员表
        let mut admins = Table::create();
        admins.table(Admins::Table).if_not_exists();
        identity_columns(
            &mut admins,
            Admins::Id,
            Admins::FirstName,
            Admins::LastName,
            Admins::Email,
            Admins::PasswordHash,
            Admins::Role,
        );
        admins
            .col(ColumnDef::new(Admins::CreatedAt).big_integer().not_null())
            .col(ColumnDef::new(Admins::UpdatedAt).big_integer().not_null());
        manager.create_table(admins).await?;

        // 创建学生表
        let mut students = Table::create();
        students.table(Students::Table).if_not_exists();
        identity_columns(
            &mut students,
            Students::Id,
            Students::FirstName,
            Students::LastName,
            Students::Email,
            Students::PasswordHash,
            Students::Role,
        );
        students
            .col(ColumnDef::new(Students::GroupId).big_integer().not_null())
            .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
            .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
            .foreign_key(
                ForeignKey::create()
                    .from(Students::Table, Students::GroupId)
                    .to(Groups::Table, Groups::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            );
        manager.create_table(students).await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Subjects::DepartmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Subjects::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::GroupId).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课（成绩）表，(student_id, subject_id) 为联合主键
        manager
            .create_table(
                Table::create()
                    .table(StudentSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentSubjects::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentSubjects::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentSubjects::Grade).integer().null())
                    .col(
                        ColumnDef::new(StudentSubjects::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_student_subjects")
                            .col(StudentSubjects::StudentId)
                            .col(StudentSubjects::SubjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentSubjects::Table, StudentSubjects::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentSubjects::Table, StudentSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 同一院系内班组名称唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_groups_department_id_name")
                    .table(Groups::Table)
                    .col(Groups::DepartmentId)
                    .col(Groups::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_group_id")
                    .table(Students::Table)
                    .col(Students::GroupId)
                    .to_owned(),
            )
            .await?;

        // 课程表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subjects_teacher_id")
                    .table(Subjects::Table)
                    .col(Subjects::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subjects_department_id")
                    .table(Subjects::Table)
                    .col(Subjects::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subjects_group_id")
                    .table(Subjects::Table)
                    .col(Subjects::GroupId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_subjects_subject_id")
                    .table(StudentSubjects::Table)
                    .col(StudentSubjects::SubjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(StudentSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Managers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "departments")]
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Groups {
    #[sea_orm(iden = "groups")]
    Table,
    Id,
    Name,
    DepartmentId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    Role,
    GroupId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Managers {
    #[sea_orm(iden = "managers")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Admins {
    #[sea_orm(iden = "admins")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
    DepartmentId,
    TeacherId,
    GroupId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentSubjects {
    #[sea_orm(iden = "student_subjects")]
    Table,
    StudentId,
    SubjectId,
    Grade,
    UpdatedAt,
}
