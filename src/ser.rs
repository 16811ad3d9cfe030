use crate::formatter::{DATE, DETAIL_DATE_TIME};
use crate::record::{Message, Record};
use serde::{ser::SerializeMap, Serialize, Serializer};

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Message::Text(text) => serializer.serialize_str(text),
            Message::Structure(raw) => raw.serialize(serializer),
        }
    }
}

pub(crate) struct SimpleEntry<'a>(pub(crate) &'a Record);

impl Serialize for SimpleEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = self.0;
        let mut model = serializer.serialize_map(Some(3))?;
        model.serialize_entry("message", record.message())?;
        model.serialize_entry("level", &record.level())?;
        model.serialize_entry("date", &record.timestamp().format(DATE).to_string())?;
        model.end()
    }
}

pub(crate) struct DetailEntry<'a>(pub(crate) &'a Record);

impl Serialize for DetailEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = self.0;
        let mut model = serializer.serialize_map(Some(4 + record.attrs().len()))?;
        model.serialize_entry("message", record.message())?;
        model.serialize_entry("level", &record.level())?;
        model.serialize_entry("thread", record.thread())?;
        for attr in record.attrs() {
            model.serialize_entry(attr.key(), attr.value())?;
        }
        model.serialize_entry(
            "date",
            &record.timestamp().format(DETAIL_DATE_TIME).to_string(),
        )?;
        model.end()
    }
}
