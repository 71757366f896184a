//! REST API helpers for the inventory backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with the bearer
//! token attached to every request. Server-side (SSR): stubs returning
//! `None`/error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Failures carry
//! the status and raw response body so pages can surface them in a toast
//! unchanged; there is no retry or de-duplication layer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Ack, ActiveCart, AddBuildingUserPayload, AddCartItemPayload, AddNewItemPayload, BelowParReport,
    Building, DeleteItemPayload, ExpiryReport, Item, NewBuildingPayload, RoomSummary, User,
};
use crate::config;

#[cfg(any(test, feature = "hydrate"))]
fn buildings_endpoint(user_id: i64) -> String {
    format!("{}/buildings/{user_id}", config::backend_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn all_rooms_endpoint(user_id: i64) -> String {
    format!("{}/allrooms/{user_id}", config::backend_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn all_items_endpoint(user_id: i64) -> String {
    format!("{}/allitems/{user_id}", config::backend_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn find_serial_endpoint(serial: &str, room_id: i64) -> String {
    format!("{}/findserial/{serial}/{room_id}", config::backend_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn expiry_endpoint(building_id: i64) -> String {
    format!("{}/getexpiry/{building_id}", config::backend_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn below_par_endpoint(building_id: i64) -> String {
    format!("{}/getbelowpar/{building_id}", config::backend_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn storage_object_url(building_name: &str) -> String {
    // Building names become object keys; spaces are the only separator the
    // form allows that is unsafe in a path.
    let key = building_name.replace(' ', "-");
    format!("{}/buildings/{key}", config::storage_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16, body: &str) -> String {
    if body.is_empty() {
        format!("request failed: status {status}")
    } else {
        format!("request failed: status {status}: {body}")
    }
}

#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
async fn read_failure(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    request_failed_message(status, body.trim())
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(token: &str, url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(read_failure(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn send_json<T: serde::de::DeserializeOwned>(
    method: &str,
    token: &str,
    url: &str,
    payload: Option<&serde_json::Value>,
) -> Result<T, String> {
    let builder = gloo_net::http::RequestBuilder::new(url)
        .method(gloo_net::http::Method::from_bytes(method.as_bytes()).map_err(|e| e.to_string())?)
        .header("Authorization", &bearer(token));
    let request = match payload {
        Some(value) => builder.json(value).map_err(|e| e.to_string())?,
        None => builder.build().map_err(|e| e.to_string())?,
    };
    let resp = request.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(read_failure(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Resolve the bearer token to the authenticated user via `GET /users/me`.
/// Returns `None` if the token is invalid or on the server.
pub async fn fetch_current_user(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/users/me", config::backend_url());
        get_json::<User>(token, &url).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Fetch the user's buildings (with rooms and memberships).
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status.
pub async fn fetch_buildings(token: &str, user_id: i64) -> Result<Vec<Building>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(token, &buildings_endpoint(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch all rooms visible to the user, for form selects.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn fetch_rooms(token: &str, user_id: i64) -> Result<Vec<RoomSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(token, &all_rooms_endpoint(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch every item with its per-room stock records.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn fetch_all_items(token: &str, user_id: i64) -> Result<Vec<Item>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(token, &all_items_endpoint(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        Err("not available on server".to_owned())
    }
}

/// Look up an item by serial number within a room, used to prefill forms.
///
/// # Errors
///
/// Returns an error string on HTTP failure, including unknown serials.
pub async fn find_serial(token: &str, serial: &str, room_id: i64) -> Result<Item, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(token, &find_serial_endpoint(serial, room_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, serial, room_id);
        Err("not available on server".to_owned())
    }
}

/// Queue a cycle-count adjustment in the active cart.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn add_item_to_cart(token: &str, payload: &AddCartItemPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/additemcart", config::backend_url());
        let value = serde_json::to_value(payload).map_err(|e| e.to_string())?;
        send_json::<serde_json::Value>("POST", token, &url, Some(&value)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err("not available on server".to_owned())
    }
}

/// Fetch the user's open cart with its pending lines.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn fetch_active_cart(token: &str) -> Result<ActiveCart, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/getactivecart", config::backend_url());
        get_json(token, &url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Commit every pending cart line via `PUT /checkoutcyclecount`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn checkout_cycle_count(token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/checkoutcyclecount", config::backend_url());
        send_json::<serde_json::Value>("PUT", token, &url, None).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Remove a single pending line from the cart.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn delete_cart_line(token: &str, cart_line_item_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/deleteitemincart", config::backend_url());
        let value = serde_json::json!({ "cartLineItemId": cart_line_item_id });
        send_json::<serde_json::Value>("DELETE", token, &url, Some(&value)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, cart_line_item_id);
        Err("not available on server".to_owned())
    }
}

/// Register a new item with its initial stock via `POST /addnewitem`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn add_new_item(token: &str, payload: &AddNewItemPayload) -> Result<Ack, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/addnewitem", config::backend_url());
        let value = serde_json::to_value(payload).map_err(|e| e.to_string())?;
        send_json("POST", token, &url, Some(&value)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err("not available on server".to_owned())
    }
}

/// Remove an item's stock record from one room.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn delete_room_item(token: &str, payload: &DeleteItemPayload) -> Result<Ack, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/deleteroomitem", config::backend_url());
        let value = serde_json::to_value(payload).map_err(|e| e.to_string())?;
        send_json("DELETE", token, &url, Some(&value)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err("not available on server".to_owned())
    }
}

/// Remove an item everywhere, including its catalog entry.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn delete_item(token: &str, payload: &DeleteItemPayload) -> Result<Ack, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/deleteitem", config::backend_url());
        let value = serde_json::to_value(payload).map_err(|e| e.to_string())?;
        send_json("DELETE", token, &url, Some(&value)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err("not available on server".to_owned())
    }
}

/// Fetch the near-expiry report for a building.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn fetch_expiry_report(token: &str, building_id: i64) -> Result<ExpiryReport, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(token, &expiry_endpoint(building_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, building_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the below-par report for a building.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn fetch_below_par_report(
    token: &str,
    building_id: i64,
) -> Result<BelowParReport, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(token, &below_par_endpoint(building_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, building_id);
        Err("not available on server".to_owned())
    }
}

/// Persist a new building and its drawn rooms via `POST /buildings`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn create_building(token: &str, payload: &NewBuildingPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/buildings", config::backend_url());
        let value = serde_json::to_value(payload).map_err(|e| e.to_string())?;
        send_json::<serde_json::Value>("POST", token, &url, Some(&value)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err("not available on server".to_owned())
    }
}

/// Grant a user access to a building via `POST /buildings/user`.
///
/// # Errors
///
/// Returns an error string on HTTP failure; the server reports unknown email
/// addresses in the response body.
pub async fn add_building_user(
    token: &str,
    payload: &AddBuildingUserPayload,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/buildings/user", config::backend_url());
        let value = serde_json::to_value(payload).map_err(|e| e.to_string())?;
        send_json::<serde_json::Value>("POST", token, &url, Some(&value)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err("not available on server".to_owned())
    }
}

/// Upload a floorplan image to object storage and return its public URL.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
#[cfg(feature = "hydrate")]
pub async fn upload_building_image(
    token: &str,
    building_name: &str,
    file: &web_sys::File,
) -> Result<String, String> {
    let url = storage_object_url(building_name);
    let resp = gloo_net::http::Request::put(&url)
        .header("Authorization", &bearer(token))
        .body(file)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(read_failure(resp).await);
    }
    Ok(url)
}
