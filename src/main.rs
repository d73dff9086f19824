use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use semporna::application::services::{
    ConversionService, EngineRegistry, LibraryService, VoiceCatalog,
};
use semporna::config::Settings;
use semporna::domain::{ArtifactId, ContentPayload, ConversionRequest, EngineKind, OwnerId};
use semporna::infrastructure::extraction::{
    CompositeExtractor, ImageOcrExtractor, PdfExtractor, PlainTextExtractor,
};
use semporna::infrastructure::observability::{init_tracing, TracingConfig};
use semporna::infrastructure::persistence::{
    create_pool, SqliteArtifactRepository, SqliteIdentityProvider,
};
use semporna::infrastructure::storage::LocalAudioStore;
use semporna::infrastructure::synthesis::{EspeakEngine, GoogleTtsEngine, StreamElementsEngine};
use semporna::infrastructure::translation::GoogleTranslator;

#[derive(Parser)]
#[command(name = "semporna", about = "Convert text, PDFs and images to spoken audio")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a payload into an audio artifact.
    Convert {
        /// Owner of the resulting artifact; registered if not known yet.
        #[arg(long)]
        owner: Uuid,
        #[arg(long, value_enum)]
        kind: PayloadKind,
        /// Path to the input file; for text, inline text may be given instead.
        #[arg(long, conflicts_with = "text")]
        input: Option<PathBuf>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long, default_value = "en")]
        language: String,
        #[arg(long, default_value = "male")]
        voice: String,
    },
    /// List an owner's artifacts.
    List {
        #[arg(long)]
        owner: Uuid,
    },
    /// Change an artifact's display filename.
    Rename {
        #[arg(long)]
        owner: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        name: String,
    },
    /// Delete an artifact (metadata and bytes).
    Delete {
        #[arg(long)]
        owner: Uuid,
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PayloadKind {
    Text,
    Pdf,
    Image,
}

struct App {
    conversion: ConversionService,
    library: LibraryService,
    identity: Arc<SqliteIdentityProvider>,
}

async fn build_app(settings: &Settings) -> anyhow::Result<App> {
    let pool = create_pool(&settings.database.url).await?;

    let repository = Arc::new(SqliteArtifactRepository::new(pool.clone()));
    repository.migrate().await?;

    let identity = Arc::new(SqliteIdentityProvider::new(pool));
    identity.migrate().await?;

    let audio_store = Arc::new(LocalAudioStore::new(PathBuf::from(
        &settings.storage.audio_dir,
    ))?);

    let extractor = Arc::new(CompositeExtractor::new(vec![
        (
            semporna::domain::SourceKind::Text,
            Arc::new(PlainTextExtractor) as _,
        ),
        (
            semporna::domain::SourceKind::Pdf,
            Arc::new(PdfExtractor::new()) as _,
        ),
        (
            semporna::domain::SourceKind::Image,
            Arc::new(ImageOcrExtractor::new(
                &settings.ocr.binary,
                &settings.ocr.language,
            )) as _,
        ),
    ]));

    let translator = Arc::new(GoogleTranslator::new(
        &settings.translation.base_url,
        Duration::from_secs(settings.translation.timeout_secs),
    ));

    let synthesis_timeout = Duration::from_secs(settings.synthesis.timeout_secs);
    let engines = EngineRegistry::new(vec![
        (
            EngineKind::GoogleTts,
            Arc::new(GoogleTtsEngine::new(
                &settings.synthesis.google_tts_base_url,
                synthesis_timeout,
            )) as _,
        ),
        (
            EngineKind::StreamElements,
            Arc::new(StreamElementsEngine::new(
                &settings.synthesis.stream_elements_base_url,
                synthesis_timeout,
            )) as _,
        ),
        (
            EngineKind::Espeak,
            Arc::new(EspeakEngine::new(
                settings.synthesis.espeak_binary.clone(),
                settings.synthesis.local_concurrency,
            )) as _,
        ),
    ]);

    let conversion = ConversionService::new(
        identity.clone(),
        extractor.clone(),
        translator,
        VoiceCatalog::new(),
        engines,
        audio_store.clone(),
        repository.clone(),
    );

    let library = LibraryService::new(identity.clone(), repository, audio_store);

    Ok(App {
        conversion,
        library,
        identity,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default());

    let cli = Cli::parse();
    let settings = Settings::from_env();
    let app = build_app(&settings).await?;

    match cli.command {
        Command::Convert {
            owner,
            kind,
            input,
            text,
            language,
            voice,
        } => {
            let owner = OwnerId::from_uuid(owner);
            app.identity.ensure_exists(owner).await?;

            let payload = match kind {
                PayloadKind::Text => {
                    let content = match (text, input) {
                        (Some(t), _) => t,
                        (None, Some(path)) => std::fs::read_to_string(path)?,
                        (None, None) => anyhow::bail!("text conversion needs --text or --input"),
                    };
                    ContentPayload::Text(content)
                }
                PayloadKind::Pdf => {
                    let path = input.ok_or_else(|| anyhow::anyhow!("--input is required"))?;
                    ContentPayload::Pdf(std::fs::read(path)?)
                }
                PayloadKind::Image => {
                    let path = input.ok_or_else(|| anyhow::anyhow!("--input is required"))?;
                    ContentPayload::Image(std::fs::read(path)?)
                }
            };

            let request = ConversionRequest::new(owner, payload)
                .with_target_language(language)
                .with_voice_selector(voice);

            let artifact = app.conversion.convert(request).await?;
            println!(
                "{}  {}  {}  {}",
                artifact.id.as_uuid(),
                artifact.filename,
                artifact.source_kind,
                artifact.created_at.to_rfc3339()
            );
        }
        Command::List { owner } => {
            let artifacts = app
                .library
                .list_artifacts(OwnerId::from_uuid(owner))
                .await?;
            for artifact in artifacts {
                println!(
                    "{}  {}  {}  {}",
                    artifact.id.as_uuid(),
                    artifact.filename,
                    artifact.source_kind,
                    artifact.created_at.to_rfc3339()
                );
            }
        }
        Command::Rename { owner, id, name } => {
            let artifact = app
                .library
                .rename_artifact(ArtifactId::from_uuid(id), OwnerId::from_uuid(owner), &name)
                .await?;
            println!("{}  {}", artifact.id.as_uuid(), artifact.filename);
        }
        Command::Delete { owner, id } => {
            app.library
                .delete_artifact(ArtifactId::from_uuid(id), OwnerId::from_uuid(owner))
                .await?;
            println!("deleted {id}");
        }
    }

    Ok(())
}
