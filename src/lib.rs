pub mod shared {
    pub mod infrastructure {
        pub mod event_history;
    }
}

pub mod modules {
    pub mod webhooks {
        pub mod core {
            pub mod event;
            pub mod history_merge;
        }
        pub mod use_cases {
            pub mod ingest_webhook {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
