/// A collection of InstrumentationLibrarySpans from a Resource.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResourceSpans {
    /// The resource for the spans in this message.
    /// If this field is not set then no resource info is known.
    #[prost(message, optional, tag="1")]
    pub resource: ::core::option::Option<super::resource::Resource>,
    /// A list of InstrumentationLibrarySpans that originate from a resource.
    #[prost(message, repeated, tag="2")]
    pub instrumentation_library_spans: ::prost::alloc::vec::Vec<InstrumentationLibrarySpans>,
}
/// A collection of Spans produced by an InstrumentationLibrary.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstrumentationLibrarySpans {
    /// The instrumentation library information for the spans in this message.
    /// If this field is not set then no library info is known.
    #[prost(message, optional, tag="1")]
    pub instrumentation_library: ::core::option::Option<super::common::InstrumentationLibrary>,
    /// A list of Spans that originate from an instrumentation library.
    #[prost(message, repeated, tag="2")]
    pub spans: ::prost::alloc::vec::Vec<Span>,
}
/// Span represents a single operation within a trace. Spans can be
/// nested to form a trace tree.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Span {
    /// A unique identifier for a trace. An empty trace_id is considered invalid.
    #[prost(bytes="vec", tag="1")]
    pub trace_id: ::prost::alloc::vec::Vec<u8>,
    /// A unique identifier for a span within a trace.
    #[prost(bytes="vec", tag="2")]
    pub span_id: ::prost::alloc::vec::Vec<u8>,
    /// trace_state conveys information about request position in multiple distributed tracing graphs.
    #[prost(string, tag="3")]
    pub trace_state: ::prost::alloc::string::String,
    /// The `span_id` of this span's parent span. If this is a root span, then this
    /// field must be empty.
    #[prost(bytes="vec", tag="4")]
    pub parent_span_id: ::prost::alloc::vec::Vec<u8>,
    /// A description of the span's operation.
    #[prost(string, tag="5")]
    pub name: ::prost::alloc::string::String,
    /// Distinguishes between spans generated in a particular context.
    #[prost(enumeration="span::SpanKind", tag="6")]
    pub kind: i32,
    /// start_time_unix_nano is the start time of the span, in nanoseconds since
    /// the UNIX epoch.
    #[prost(fixed64, tag="7")]
    pub start_time_unix_nano: u64,
    /// end_time_unix_nano is the end time of the span, in nanoseconds since
    /// the UNIX epoch.
    #[prost(fixed64, tag="8")]
    pub end_time_unix_nano: u64,
    /// attributes is a collection of key/value pairs.
    #[prost(message, repeated, tag="9")]
    pub attributes: ::prost::alloc::vec::Vec<super::common::KeyValue>,
    /// dropped_attributes_count is the number of attributes that were discarded.
    #[prost(uint32, tag="10")]
    pub dropped_attributes_count: u32,
    /// events is a collection of Event items.
    #[prost(message, repeated, tag="11")]
    pub events: ::prost::alloc::vec::Vec<span::Event>,
    /// dropped_events_count is the number of dropped events.
    #[prost(uint32, tag="12")]
    pub dropped_events_count: u32,
    /// links is a collection of Links, which are references from this span to a span
    /// in the same or different trace.
    #[prost(message, repeated, tag="13")]
    pub links: ::prost::alloc::vec::Vec<span::Link>,
    /// dropped_links_count is the number of dropped links after the maximum size was
    /// enforced.
    #[prost(uint32, tag="14")]
    pub dropped_links_count: u32,
    /// An optional final status for this span.
    #[prost(message, optional, tag="15")]
    pub status: ::core::option::Option<Status>,
}
/// Nested message and enum types in `Span`.
pub mod span {
    /// Event is a time-stamped annotation of the span, consisting of user-supplied
    /// text description and key-value pairs.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Event {
        /// time_unix_nano is the time the event occurred.
        #[prost(fixed64, tag="1")]
        pub time_unix_nano: u64,
        /// name of the event.
        #[prost(string, tag="2")]
        pub name: ::prost::alloc::string::String,
        /// attributes is a collection of attribute key/value pairs on the event.
        #[prost(message, repeated, tag="3")]
        pub attributes: ::prost::alloc::vec::Vec<super::super::common::KeyValue>,
        /// dropped_attributes_count is the number of dropped attributes.
        #[prost(uint32, tag="4")]
        pub dropped_attributes_count: u32,
    }
    /// A pointer from the current span to another span in the same trace or in a
    /// different trace.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Link {
        /// A unique identifier of a trace that this linked span is part of.
        #[prost(bytes="vec", tag="1")]
        pub trace_id: ::prost::alloc::vec::Vec<u8>,
        /// A unique identifier for the linked span.
        #[prost(bytes="vec", tag="2")]
        pub span_id: ::prost::alloc::vec::Vec<u8>,
        /// The trace_state associated with the link.
        #[prost(string, tag="3")]
        pub trace_state: ::prost::alloc::string::String,
        /// attributes is a collection of attribute key/value pairs on the link.
        #[prost(message, repeated, tag="4")]
        pub attributes: ::prost::alloc::vec::Vec<super::super::common::KeyValue>,
        /// dropped_attributes_count is the number of dropped attributes.
        #[prost(uint32, tag="5")]
        pub dropped_attributes_count: u32,
    }
    /// SpanKind is the type of span.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum SpanKind {
        /// Unspecified. Do NOT use as default.
        Unspecified = 0,
        /// An internal operation within an application.
        Internal = 1,
        /// Server-side handling of an RPC or other remote network request.
        Server = 2,
        /// A request to some remote service.
        Client = 3,
        /// A producer sending a message to a broker.
        Producer = 4,
        /// A consumer receiving a message from a broker.
        Consumer = 5,
    }
}
/// The Status type defines a logical error model that is suitable for different
/// programming environments, including REST APIs and RPC APIs.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Status {
    /// The deprecated status code. This is an optional field.
    #[prost(enumeration="status::DeprecatedStatusCode", tag="1")]
    pub deprecated_code: i32,
    /// A developer-facing human readable error message.
    #[prost(string, tag="2")]
    pub message: ::prost::alloc::string::String,
    /// The status code.
    #[prost(enumeration="status::StatusCode", tag="3")]
    pub code: i32,
}
/// Nested message and enum types in `Status`.
pub mod status {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum DeprecatedStatusCode {
        Ok = 0,
        Cancelled = 1,
        UnknownError = 2,
        InvalidArgument = 3,
        DeadlineExceeded = 4,
        NotFound = 5,
        AlreadyExists = 6,
        PermissionDenied = 7,
        ResourceExhausted = 8,
        FailedPrecondition = 9,
        Aborted = 10,
        OutOfRange = 11,
        Unimplemented = 12,
        InternalError = 13,
        Unavailable = 14,
        DataLoss = 15,
        Unauthenticated = 16,
    }
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum StatusCode {
        /// The default status.
        Unset = 0,
        /// The operation completed successfully.
        Ok = 1,
        /// The operation contains an error.
        Error = 2,
    }
}
