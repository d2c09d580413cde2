use shorts_datastore::HistoryStore;

use crate::{
    llm::{ImageGenerator, TextGenerator},
    yt::{MetadataFetcher, TranscriptFetcher},
    ShortsPipeline,
};

pub struct ShortsPipelineBuilder<M = (), C = (), T = (), I = (), S = ()> {
    metadata_fetcher: M,
    transcript_fetcher: C,
    text_generator: T,
    image_generator: I,
    store: S,
}

impl ShortsPipelineBuilder {
    pub fn new() -> Self {
        Self {
            metadata_fetcher: (),
            transcript_fetcher: (),
            text_generator: (),
            image_generator: (),
            store: (),
        }
    }
}

impl Default for ShortsPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, C, T, I, S> ShortsPipelineBuilder<M, C, T, I, S> {
    pub fn metadata_fetcher<M2: MetadataFetcher + Send + Sync + 'static>(
        self,
        metadata_fetcher: M2,
    ) -> ShortsPipelineBuilder<M2, C, T, I, S> {
        ShortsPipelineBuilder {
            metadata_fetcher,
            transcript_fetcher: self.transcript_fetcher,
            text_generator: self.text_generator,
            image_generator: self.image_generator,
            store: self.store,
        }
    }

    pub fn transcript_fetcher<C2: TranscriptFetcher + Send + Sync + 'static>(
        self,
        transcript_fetcher: C2,
    ) -> ShortsPipelineBuilder<M, C2, T, I, S> {
        ShortsPipelineBuilder {
            metadata_fetcher: self.metadata_fetcher,
            transcript_fetcher,
            text_generator: self.text_generator,
            image_generator: self.image_generator,
            store: self.store,
        }
    }

    pub fn text_generator<T2: TextGenerator + Send + Sync + 'static>(
        self,
        text_generator: T2,
    ) -> ShortsPipelineBuilder<M, C, T2, I, S> {
        ShortsPipelineBuilder {
            metadata_fetcher: self.metadata_fetcher,
            transcript_fetcher: self.transcript_fetcher,
            text_generator,
            image_generator: self.image_generator,
            store: self.store,
        }
    }

    pub fn image_generator<I2: ImageGenerator + Send + Sync + 'static>(
        self,
        image_generator: I2,
    ) -> ShortsPipelineBuilder<M, C, T, I2, S> {
        ShortsPipelineBuilder {
            metadata_fetcher: self.metadata_fetcher,
            transcript_fetcher: self.transcript_fetcher,
            text_generator: self.text_generator,
            image_generator,
            store: self.store,
        }
    }

    pub fn store<S2: HistoryStore + Send + Sync + 'static>(
        self,
        store: S2,
    ) -> ShortsPipelineBuilder<M, C, T, I, S2> {
        ShortsPipelineBuilder {
            metadata_fetcher: self.metadata_fetcher,
            transcript_fetcher: self.transcript_fetcher,
            text_generator: self.text_generator,
            image_generator: self.image_generator,
            store,
        }
    }
}

impl<M, C, T, I, S> ShortsPipelineBuilder<M, C, T, I, S>
where
    M: MetadataFetcher + Send + Sync + 'static,
    C: TranscriptFetcher + Send + Sync + 'static,
    T: TextGenerator + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    S: HistoryStore + Send + Sync + 'static,
{
    pub fn build(self) -> ShortsPipeline<M, C, T, I, S> {
        ShortsPipeline {
            metadata_fetcher: self.metadata_fetcher,
            transcript_fetcher: self.transcript_fetcher,
            text_generator: self.text_generator,
            image_generator: self.image_generator,
            store: self.store,
        }
    }
}
