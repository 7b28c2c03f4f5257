//! 访问控制
//!
//! 登录流程（OAuth2）由外部身份服务完成，本服务只负责：
//! - 校验请求头 `Authorization: Bearer <token>` 中的 HS256 令牌
//! - 从令牌中解析出用户 ID，并在用户表中确认用户存在
//! - 以用户表中的角色为准，检查是否允许访问业务接口
//!
//! 当前用户总是作为参数显式传递给服务层，不存在全局的"当前用户"。
//!
//! 不需要令牌的接口：`/docs`、`/health`、`/api/v1/library-count/{name}`。

use crate::models::err::AppError;
use crate::AppState;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use color_eyre::eyre::eyre;
use database::{Role, UserRepositoryTrait};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// 允许访问业务接口的角色
pub const ALLOWED_ROLES: [Role; 3] = [Role::User, Role::Guest, Role::Admin];

/// 令牌中的声明
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// 用户 ID
    pub sub: String,
    /// 角色名称：`USER` / `GUEST` / `ADMIN`
    pub role: String,
    /// 过期时间（unix timestamp）
    pub exp: u64,
}

/// 已认证的当前用户
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
    pub role: Role,
}

impl Principal {
    pub fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }

    /// 角色不在 `allowed` 中时返回 [`AppError::Forbidden`]
    pub fn ensure_role(&self, allowed: &[Role]) -> Result<(), AppError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!("role {} is not allowed", self.role)))
        }
    }
}

/// 令牌签发和校验使用的密钥
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// 为用户签发令牌
    ///
    /// 正式环境的令牌由身份服务签发，这里主要给运维工具和测试使用
    pub fn issue_token(&self, principal: &Principal, ttl: Duration) -> Result<String, AppError> {
        let claims = Claims {
            sub: principal.user_id.to_string(),
            role: principal.role.as_str().to_string(),
            exp: (Utc::now() + ttl).timestamp().max(0) as u64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(eyre!("failed to sign token: {e}")))
    }

    /// 校验令牌并解析出当前用户
    pub fn verify(&self, token: &str) -> Result<Principal, AppError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| AppError::Unauthorized(format!("invalid token: {e}")))?;

        let user_id = data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::Unauthorized(format!("invalid subject: {}", data.claims.sub)))?;

        let role = data.claims.role.parse::<Role>().map_err(AppError::Forbidden)?;

        Ok(Principal { user_id, role })
    }
}

/// 根据令牌中的用户 ID 加载用户
///
/// 用户不存在（已删除或从未注册）时返回 [`AppError::Unauthorized`]；
/// 角色以用户表为准，忽略令牌中声明的角色。
pub async fn resolve_principal(users: &dyn UserRepositoryTrait, claimed: Principal) -> Result<Principal, AppError> {
    let user = users
        .find_user_by_id(claimed.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized(format!("unknown user {}", claimed.user_id)))?;

    let principal = Principal::new(user.id, user.role);
    principal.ensure_role(&ALLOWED_ROLES)?;
    Ok(principal)
}

/// 从请求头中提取 Bearer 令牌
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("missing Authorization header".to_string()))?;

    let value = header
        .to_str()
        .map_err(|_| AppError::Unauthorized("malformed Authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized("expected a Bearer token".to_string()))
}

/// 在handler参数中声明 `principal: Principal` 即要求请求必须携带有效令牌
impl FromRequestParts<AppState> for Principal {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let principal = match bearer_token(parts).and_then(|token| state.jwt_keys.verify(token)) {
            Ok(claimed) => resolve_principal(state.users.as_ref(), claimed).await,
            Err(err) => Err(err),
        };

        principal.inspect_err(|err| warn!("🔒 拒绝访问 {}: {}", parts.uri.path(), err))
    }
}
