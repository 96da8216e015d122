//! Authentication endpoints.

use thriftwear_core::{ChangePassword, DefaultResponse, ResetPassword, SignInForm, UserCreate, UserRead};

use crate::call::Call;
use crate::client::ApiClient;
use crate::request::Endpoint;

impl ApiClient {
    /// Get the signed-in user's role.
    ///
    /// `GET /v1/role`
    #[must_use]
    pub fn get_role(&self) -> Call<DefaultResponse> {
        self.call(Endpoint::get("/v1/role"))
    }

    /// Sign in with email and password.
    ///
    /// `POST /v1/sign-in`, form-urlencoded per the OAuth2 password flow.
    /// The returned record carries the bearer token; pass it to
    /// [`ApiClient::set_token`] to authenticate subsequent calls.
    #[must_use]
    pub fn sign_in(&self, form: SignInForm) -> Call<UserRead> {
        self.call(Endpoint::post("/v1/sign-in").form(vec![
            ("username", form.username),
            ("password", form.password),
        ]))
    }

    /// Register a new account.
    ///
    /// `POST /v1/sign-up`
    #[must_use]
    pub fn sign_up(&self, body: &UserCreate) -> Call<UserRead> {
        self.call(Endpoint::post("/v1/sign-up").json(body))
    }

    /// Request a password reset email.
    ///
    /// `POST /v1/forgot-password?email=...`
    #[must_use]
    pub fn forgot_password(&self, email: &str) -> Call<DefaultResponse> {
        self.call(Endpoint::post("/v1/forgot-password").query("email", Some(email)))
    }

    /// Reset a forgotten password.
    ///
    /// `POST /v1/reset-password`
    #[must_use]
    pub fn reset_password(&self, body: &ResetPassword) -> Call<DefaultResponse> {
        self.call(Endpoint::post("/v1/reset-password").json(body))
    }

    /// Change the signed-in user's password.
    ///
    /// `PUT /v1/change-password`
    #[must_use]
    pub fn change_password(&self, body: &ChangePassword) -> Call<DefaultResponse> {
        self.call(Endpoint::put("/v1/change-password").json(body))
    }
}
