//! Handler modules for the demo application.
