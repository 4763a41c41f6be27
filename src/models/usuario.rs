use serde::{Deserialize, Serialize};

/// Usuário normalizado devolvido por `GET /usuarios`. A identidade é o `uuid`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct Usuario {
    pub uuid: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub ciudad: String,
    pub pais: String,
}

/// Payload do randomuser.me. Campos extras do upstream são ignorados.
#[derive(Debug, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<RandomUserResult>,
}

#[derive(Debug, Deserialize)]
pub struct RandomUserResult {
    pub login: RandomUserLogin,
    pub name: RandomUserName,
    pub email: String,
    pub location: RandomUserLocation,
}

#[derive(Debug, Deserialize)]
pub struct RandomUserLogin {
    pub uuid: String,
}

#[derive(Debug, Deserialize)]
pub struct RandomUserName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Deserialize)]
pub struct RandomUserLocation {
    pub city: String,
    pub country: String,
}

impl From<RandomUserResult> for Usuario {
    fn from(result: RandomUserResult) -> Self {
        Usuario {
            uuid: result.login.uuid,
            nombre: result.name.first,
            apellido: result.name.last,
            email: result.email,
            ciudad: result.location.city,
            pais: result.location.country,
        }
    }
}
