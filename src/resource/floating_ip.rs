//! Floating IPs of datastore instances
//!
//! Both calls address the collection and name the instance in the body.

use super::envelope;
use crate::api::DbaasClient;
use crate::error::Result;
use serde::Serialize;

pub const FLOATING_IPS_URI: &str = "/floating-ips";

const FLOATING_IP_KEY: &str = "floating-ip";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FloatingIpOpts {
    pub instance_id: String,
}

/// Attach a floating IP to an instance
pub async fn create_floating_ip(client: &DbaasClient, opts: &FloatingIpOpts) -> Result<()> {
    client
        .post(FLOATING_IPS_URI, &envelope(FLOATING_IP_KEY, opts))
        .await?;
    Ok(())
}

/// Detach the floating IP of an instance
pub async fn delete_floating_ip(client: &DbaasClient, opts: &FloatingIpOpts) -> Result<()> {
    client
        .delete_with_body(FLOATING_IPS_URI, &envelope(FLOATING_IP_KEY, opts))
        .await?;
    Ok(())
}
