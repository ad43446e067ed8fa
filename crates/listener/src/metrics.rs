use metrics::Counter;
use metrics_derive::Metrics;

#[derive(Metrics, Clone)]
#[metrics(scope = "flashblocks_listener")]
pub struct Metrics {
    #[metric(describe = "Count of payload frames received from the feed")]
    pub frames_received: Counter,

    #[metric(describe = "Count of flashblocks decoded and handed to the consumer")]
    pub flashblocks_decoded: Counter,

    #[metric(describe = "Count of binary frames that failed decompression")]
    pub decode_errors: Counter,

    #[metric(describe = "Count of frames that failed payload parsing")]
    pub parse_errors: Counter,

    #[metric(describe = "Count of transport errors on the upstream connection")]
    pub upstream_errors: Counter,
}
