mod inputs;
mod params;

use crate::{
    components::{badge::Badge, button::Button, card::Card},
    error::ErrorCard,
    url::build_url,
};
use anyhow::{anyhow, bail, Result};
use leptos::{leptos_dom::logging, *};
use leptos_router::*;
use pipedeck_models::dtos::{
    PipelineVersion, RunParams, RuntimeConfigParameters, VersionQueryParams,
};
use reqwest::Client;

use self::params::RunParamsSection;

type EnqueueArgs = (String, String, RuntimeConfigParameters);

async fn get_version(id: String) -> Result<PipelineVersion> {
    let params = VersionQueryParams::Id { id };
    let url = build_url("/v1/versions")?;

    let res = Client::builder()
        .build()?
        .get(&url)
        .header("Accept", "application/json")
        .query(&params)
        .send()
        .await?;

    if res.status().is_success() {
        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    } else {
        bail!("unable to fetch the pipeline version")
    }
}

async fn enqueue_run(
    pipeline: String,
    version: String,
    parameters: RuntimeConfigParameters,
) -> Result<String> {
    let data = RunParams::EnqueueRun {
        pipeline,
        version,
        parameters: Some(parameters),
    };
    let url = build_url("/v1/runs")?;

    let res = Client::builder()
        .build()?
        .post(&url)
        .json(&data)
        .send()
        .await?;

    res.json::<String>().await.map_err(|e| anyhow!(e))
}

#[component]
pub fn RunCreate() -> impl IntoView {
    let query = use_query_map();
    let id = move || query.with(|q| q.get("id").cloned());
    let name = move || query.with(|q| q.get("name").cloned());

    let version = create_rw_signal(None::<PipelineVersion>);
    let run_params = create_rw_signal(RuntimeConfigParameters::new());
    let started = create_rw_signal(None::<String>);

    let data = create_resource(
        move || id(),
        |id| async move {
            let Some(id) = id else {
                return Ok(None);
            };
            get_version(id).await.map(Some).map_err(|e| e.to_string())
        },
    );

    create_effect(move |_| {
        if let Some(Ok(Some(value))) = data.get() {
            run_params.set(value.default_parameters());
            version.set(Some(value));
        }
    });

    let start_run = create_action(move |args: &EnqueueArgs| {
        let (pipeline, version, params) = args.clone();
        async move {
            match enqueue_run(pipeline, version, params).await {
                Ok(id) => started.set(Some(id)),
                Err(e) => logging::console_error(&e.to_string()),
            }
        }
    });

    view! {
        <div class="flex flex-col gap-4">
            <Show when=move || matches!(data.get(), Some(Err(_))) fallback=|| view! {}>
                <ErrorCard error=move || data.get().unwrap().unwrap_err()/>
            </Show>
            <Card>
                <div class="flex flex-col px-8 py-12 gap-y-4">
                    <div class="flex">
                        <div class="grow flex flex-col">
                            <div class="text-2xl">"Start a new run"</div>
                            <div class="text-gray-400">{name}</div>
                            <Show when=move || started.get().is_some() fallback=|| view! {}>
                                <div class="flex-shrink mt-4">
                                    <Badge>
                                        "Run " {move || started.get().unwrap_or_default()}
                                        " started"
                                    </Badge>
                                </div>
                            </Show>
                        </div>
                        <div class="min-w-40">
                            <Button on:click=move |_| {
                                let (Some(pipeline), Some(version_id)) = (name(), id()) else {
                                    return;
                                };
                                start_run.dispatch((pipeline, version_id, run_params.get()));
                            }>
                                "Start"
                            </Button>
                        </div>
                    </div>
                </div>
            </Card>
            <RunParamsSection
                version=version
                params=run_params
                on_change=Callback::new(move |next| run_params.set(next))/>
        </div>
    }
}
