use anyhow::Result;
use serde::Deserialize;
use ureq::Agent;

// https://servicodados.ibge.gov.br/api/docs/localidades
const ENDPOINT: &str = "https://servicodados.ibge.gov.br/api/v1/localidades/estados";

#[derive(Debug, Deserialize)]
pub struct Municipality {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Fetch a state's municipality list, in the order IBGE returns it. Network
/// errors and non-2xx statuses propagate; there is no retry.
pub fn municipalities(agent: &Agent, state: u32) -> Result<Vec<Municipality>> {
    let response: Vec<Municipality> = agent
        .get(&format!("{ENDPOINT}/{state}/municipios"))
        .call()?
        .into_json()?;
    Ok(response)
}
