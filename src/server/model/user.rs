use crate::{
    model::{
        api::FieldErrorDto,
        user::{UpdateProfileDto, UserDto},
    },
    server::{
        error::validation::ValidationError,
        model::{check_length, check_phone},
    },
};

pub fn user_dto(user: entity::user::Model) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email,
        name: user.name,
        phone: user.phone,
        college: user.college,
        image: user.image,
        admin: user.admin,
    }
}

#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    /// Grants admin when true; never revokes an existing grant.
    pub grant_admin: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProfileParams {
    pub name: String,
    pub phone: Option<String>,
    pub college: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Result<Self, ValidationError> {
        let params = Self {
            name: dto.name.trim().to_string(),
            phone: dto
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            college: dto
                .college
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        };

        let mut errors: Vec<FieldErrorDto> = Vec::new();
        check_length(&mut errors, "name", "Name", &params.name, 2, 100);
        if let Some(phone) = &params.phone {
            check_phone(&mut errors, "phone", phone);
        }
        if let Some(college) = &params.college {
            check_length(&mut errors, "college", "College", college, 2, 200);
        }
        ValidationError::check(errors)?;

        Ok(params)
    }
}
