mod property_chunking;
