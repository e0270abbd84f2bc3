use crate::actor_framework::Entity;
use crate::domain::{User, UserId};
use super::dtos::{UserRequest, UserResponse};

impl Entity for User {
    type Id = UserId;
    type Request = UserRequest;
    type Response = UserResponse;

    fn id(&self) -> Option<UserId> { self.id }

    fn assign_id(&mut self, id: UserId) { self.id = Some(id); }

    fn from_request(request: UserRequest) -> Self {
        let mut user = User::default();
        user.apply_request(request);
        user
    }

    /// Updates the user's profile information.
    ///
    /// # Fields Updated
    /// - `first_name`, `last_name`, `email`, `phone`: always overwritten
    /// - `address`: replaced only when the request carries one
    ///
    /// `id` and `role` are never touched.
    fn apply_request(&mut self, request: UserRequest) {
        self.first_name = request.first_name;
        self.last_name = request.last_name;
        self.email = request.email;
        self.phone = request.phone;
        if let Some(address) = request.address {
            self.address = Some(address.into());
        }
    }

    fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            role: self.role,
            address: self.address.as_ref().map(Into::into),
        }
    }
}
