use http::Method;
use scc_api_model::{
    AttachmentCollection,
    AttachmentPrototype,
    ListAllAttachmentsOptions,
    ListAttachmentsOptions,
    ProfileAttachment,
    ProfileAttachmentBase,
    ProfileAttachmentResponse,
};

use crate::client::{append_query, required, RequestRunner};
use crate::pager::{list_request, Pager};
use crate::{Response, Result};

pub type AttachmentsPager<'a, R> = Pager<'a, R, ListAttachmentsOptions>;
pub type AllAttachmentsPager<'a, R> = Pager<'a, R, ListAllAttachmentsOptions>;

/// Retrieve one page of the attachments of a profile.
pub async fn list(
    client: &impl RequestRunner,
    options: &ListAttachmentsOptions,
) -> Result<Response<AttachmentCollection>> {
    let profile_id = required("profile_id", &options.profile_id)?;
    let mut path =
        client.make_instance_url(&["profiles", profile_id, "attachments"])?;
    append_query(&mut path, "limit", options.limit);
    append_query(&mut path, "start", options.start.as_deref());

    client.run(Method::GET, path).await
}

list_request!(ListAttachmentsOptions, AttachmentCollection, list);

/// Page through every attachment of a profile.
pub fn pager<R: RequestRunner>(
    client: &R,
    options: ListAttachmentsOptions,
) -> Result<AttachmentsPager<'_, R>> {
    Pager::new(client, options)
}

/// Retrieve one page of the attachments across every profile of the
/// instance.
pub async fn list_all(
    client: &impl RequestRunner,
    options: &ListAllAttachmentsOptions,
) -> Result<Response<AttachmentCollection>> {
    let mut path = client.make_instance_url(&["attachments"])?;
    append_query(&mut path, "limit", options.limit);
    append_query(&mut path, "start", options.start.as_deref());
    append_query(
        &mut path,
        "attachment_name",
        options.attachment_name.as_deref(),
    );

    client.run(Method::GET, path).await
}

list_request!(ListAllAttachmentsOptions, AttachmentCollection, list_all);

/// Page through the attachments of every profile.
pub fn all_pager<R: RequestRunner>(
    client: &R,
    options: ListAllAttachmentsOptions,
) -> Result<AllAttachmentsPager<'_, R>> {
    Pager::new(client, options)
}

/// Attach a profile to one or more scopes.
pub async fn create<T>(
    client: &impl RequestRunner,
    profile_id: T,
    attachments: &AttachmentPrototype,
) -> Result<Response<ProfileAttachmentResponse>>
where
    T: AsRef<str>,
{
    let profile_id = required("profile_id", profile_id.as_ref())?;
    let path =
        client.make_instance_url(&["profiles", profile_id, "attachments"])?;
    client.run_with_body(Method::POST, path, attachments).await
}

/// Retrieve an attachment of a profile.
pub async fn get<P, T>(
    client: &impl RequestRunner,
    profile_id: P,
    id: T,
) -> Result<Response<ProfileAttachment>>
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    let profile_id = required("profile_id", profile_id.as_ref())?;
    let id = required("attachment_id", id.as_ref())?;
    let path = client.make_instance_url(&[
        "profiles",
        profile_id,
        "attachments",
        id,
    ])?;
    client.run(Method::GET, path).await
}

/// Replace the scope, schedule or notifications of an attachment.
pub async fn replace<P, T>(
    client: &impl RequestRunner,
    profile_id: P,
    id: T,
    attachment: &ProfileAttachmentBase,
) -> Result<Response<ProfileAttachment>>
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    let profile_id = required("profile_id", profile_id.as_ref())?;
    let id = required("attachment_id", id.as_ref())?;
    let path = client.make_instance_url(&[
        "profiles",
        profile_id,
        "attachments",
        id,
    ])?;
    client.run_with_body(Method::PUT, path, attachment).await
}

/// Delete an attachment. Scheduled scans for it stop.
pub async fn delete<P, T>(
    client: &impl RequestRunner,
    profile_id: P,
    id: T,
) -> Result<Response<ProfileAttachment>>
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    let profile_id = required("profile_id", profile_id.as_ref())?;
    let id = required("attachment_id", id.as_ref())?;
    let path = client.make_instance_url(&[
        "profiles",
        profile_id,
        "attachments",
        id,
    ])?;
    client.run(Method::DELETE, path).await
}
