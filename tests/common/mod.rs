// In-memory providers shared by the pipeline and route tests
#![allow(dead_code)]

use ai_stylist::core::Stylist;
use ai_stylist::models::WeatherSnapshot;
use ai_stylist::services::{
    ChatPrompt, PhotoSearchError, PhotoSearchProvider, ReasoningError, ReasoningProvider,
    WeatherError, WeatherProvider,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct FakeWeather {
    pub snapshot: Option<WeatherSnapshot>,
    pub calls: AtomicUsize,
}

impl FakeWeather {
    pub fn ok(temp: f64, condition: &str) -> Arc<Self> {
        Arc::new(Self {
            snapshot: Some(WeatherSnapshot {
                temperature_celsius: temp,
                condition: condition.to_string(),
            }),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            snapshot: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for FakeWeather {
    async fn current(&self, _latitude: f64, _longitude: f64) -> Result<WeatherSnapshot, WeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.snapshot
            .clone()
            .ok_or_else(|| WeatherError::ApiError("401 Unauthorized".to_string()))
    }
}

pub struct FakeReasoning {
    pub reply: Option<String>,
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<ChatPrompt>>,
}

impl FakeReasoning {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReasoningProvider for FakeReasoning {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ReasoningError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.clone());
        self.reply
            .clone()
            .ok_or_else(|| ReasoningError::ApiError("503 Service Unavailable".to_string()))
    }
}

pub struct FakePhotos {
    pub urls: Option<Vec<String>>,
    pub calls: AtomicUsize,
    pub queries: Mutex<Vec<String>>,
}

impl FakePhotos {
    pub fn returning(urls: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            urls: Some(urls.iter().map(|u| u.to_string()).collect()),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            urls: None,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.queries.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl PhotoSearchProvider for FakePhotos {
    async fn search(&self, query: &str) -> Result<Vec<String>, PhotoSearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        self.urls
            .clone()
            .ok_or_else(|| PhotoSearchError::ApiError("500 Internal Server Error".to_string()))
    }
}

pub fn stylist(weather: &Arc<FakeWeather>, reasoning: &Arc<FakeReasoning>, photos: &Arc<FakePhotos>) -> Stylist {
    Stylist::new(weather.clone(), reasoning.clone(), photos.clone())
}

pub const MODEL_REPLY: &str = r#"Here you go:
{"reasoning": "A cropped wool jacket balances your frame and keeps you warm in the drizzle.", "image_prompt": "cropped grey wool jacket wide trousers loafers minimal"}"#;
